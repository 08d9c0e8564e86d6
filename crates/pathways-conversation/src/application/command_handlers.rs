//! Command handlers for the conversation.
//!
//! This module contains the boundary operations: store the user's input,
//! render the conversation (running a turn when input is pending) and reset
//! a session. Every handler works under the session's lock.

use pathways_core::clock::Clock;
use pathways_core::command::Command;
use pathways_core::error::DomainError;
use tracing::{error, info};

use super::dispatcher::StageDispatcher;
use super::query_handlers::ConversationView;
use super::registry::SessionRegistry;
use crate::domain::commands::{RenderConversation, ResetSession, SubmitInput};
use crate::domain::entries::UserEntry;

/// Handles the `SubmitInput` command: validates the text and stores it as
/// the session's pending input, replacing any unconsumed input.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the text is empty. The session is
/// not touched in that case.
pub async fn handle_submit_input(
    command: &SubmitInput,
    registry: &SessionRegistry,
    clock: &dyn Clock,
) -> Result<(), DomainError> {
    let input = UserEntry::new(command.text.as_str())?;

    let session = registry.session(command.session_id, clock).await;
    session.lock().await.submit_input(input, clock);

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        session_id = %command.session_id(),
        "stored pending input"
    );
    Ok(())
}

/// Handles the `RenderConversation` command: answers the pending input, if
/// any, then returns the conversation. Without pending input this is a read.
///
/// The pending input is consumed even when the turn fails; the user
/// resubmits to retry the same stage.
///
/// # Errors
///
/// Returns `DomainError::GenerationNetwork` or `DomainError::GenerationParse`
/// if the turn's content could not be generated.
pub async fn handle_render(
    command: &RenderConversation,
    registry: &SessionRegistry,
    dispatcher: &StageDispatcher,
    clock: &dyn Clock,
) -> Result<ConversationView, DomainError> {
    let shared = registry.session(command.session_id, clock).await;
    let mut session = shared.lock().await;

    if let Some(input) = session.take_pending_input() {
        if let Err(err) = dispatcher.advance(&mut session, input, clock).await {
            error!(
                command = command.command_type(),
                correlation_id = %command.correlation_id(),
                session_id = %command.session_id(),
                stage = session.stage().index(),
                error = %err,
                "conversation turn failed"
            );
            session.touch(clock);
            return Err(err);
        }
    } else {
        session.touch(clock);
    }

    Ok(ConversationView::of(&session))
}

/// Handles the `ResetSession` command: clears log, pending input and stage.
/// Waits for any in-flight turn on the session to finish first.
pub async fn handle_reset(command: &ResetSession, registry: &SessionRegistry, clock: &dyn Clock) {
    let session = registry.session(command.session_id, clock).await;
    session.lock().await.reset(clock);

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        session_id = %command.session_id(),
        "session reset"
    );
}
