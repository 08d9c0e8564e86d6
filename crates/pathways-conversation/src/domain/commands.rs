//! Commands accepted at the conversation boundary.

use pathways_core::command::Command;
use uuid::Uuid;

/// Command to store the user's next message.
#[derive(Debug, Clone)]
pub struct SubmitInput {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The conversation session.
    pub session_id: Uuid,
    /// The submitted text.
    pub text: String,
}

impl Command for SubmitInput {
    fn command_type(&self) -> &'static str {
        "conversation.submit_input"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn session_id(&self) -> Uuid {
        self.session_id
    }
}

/// Command to render the conversation, answering any pending input first.
#[derive(Debug, Clone)]
pub struct RenderConversation {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The conversation session.
    pub session_id: Uuid,
}

impl Command for RenderConversation {
    fn command_type(&self) -> &'static str {
        "conversation.render"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn session_id(&self) -> Uuid {
        self.session_id
    }
}

/// Command to clear a conversation back to its initial state.
#[derive(Debug, Clone)]
pub struct ResetSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The conversation session.
    pub session_id: Uuid,
}

impl Command for ResetSession {
    fn command_type(&self) -> &'static str {
        "conversation.reset"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn session_id(&self) -> Uuid {
        self.session_id
    }
}
