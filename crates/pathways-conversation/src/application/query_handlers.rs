//! Query handlers for the conversation.
//!
//! Reads never dispatch a turn and never register a session.

use serde::Serialize;
use uuid::Uuid;

use super::registry::SessionRegistry;
use crate::domain::entries::LogEntry;
use crate::domain::session::ConversationSession;
use crate::domain::stage::Stage;

/// Read-only view of a conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationView {
    /// The session identifier.
    pub session_id: Uuid,
    /// Number of completed turns.
    pub stage: u32,
    /// Name of the current stage.
    pub stage_name: &'static str,
    /// Whether input is waiting to be answered.
    pub has_pending_input: bool,
    /// The conversation log, oldest first.
    pub log: Vec<LogEntry>,
}

impl ConversationView {
    /// Snapshot of `session`.
    #[must_use]
    pub fn of(session: &ConversationSession) -> Self {
        Self {
            session_id: session.id,
            stage: session.stage().index(),
            stage_name: session.stage().name(),
            has_pending_input: session.pending_input().is_some(),
            log: session.log().to_vec(),
        }
    }

    /// The view of a session that has never been interacted with.
    #[must_use]
    pub fn empty(session_id: Uuid) -> Self {
        Self {
            session_id,
            stage: Stage::Initial.index(),
            stage_name: Stage::Initial.name(),
            has_pending_input: false,
            log: Vec::new(),
        }
    }
}

/// Retrieves the current view of a conversation without answering any
/// pending input. Unknown sessions read as empty.
pub async fn get_conversation(session_id: Uuid, registry: &SessionRegistry) -> ConversationView {
    match registry.get(session_id).await {
        Some(session) => ConversationView::of(&*session.lock().await),
        None => ConversationView::empty(session_id),
    }
}
