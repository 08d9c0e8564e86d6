//! Session state for a single conversation.

use chrono::{DateTime, Utc};
use pathways_core::clock::Clock;
use uuid::Uuid;

use super::entries::{LogEntry, UserEntry};
use super::stage::Stage;

/// The state of one conversation: its stage, the input waiting to be
/// answered and the ordered log of everything said so far.
///
/// The log is append-only. It only grows through [`complete_turn`], which
/// also advances the stage, so a reader never sees one without the other.
///
/// [`complete_turn`]: ConversationSession::complete_turn
#[derive(Debug, Clone)]
pub struct ConversationSession {
    /// Session identifier.
    pub id: Uuid,
    stage: Stage,
    pending_input: Option<UserEntry>,
    log: Vec<LogEntry>,
    last_active_at: DateTime<Utc>,
}

impl ConversationSession {
    /// Creates an empty session in the initial stage.
    #[must_use]
    pub fn new(id: Uuid, clock: &dyn Clock) -> Self {
        Self {
            id,
            stage: Stage::Initial,
            pending_input: None,
            log: Vec::new(),
            last_active_at: clock.now(),
        }
    }

    /// The current stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The input waiting for the next render, if any.
    #[must_use]
    pub fn pending_input(&self) -> Option<&UserEntry> {
        self.pending_input.as_ref()
    }

    /// The conversation log, oldest first.
    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// When the session was last touched.
    #[must_use]
    pub fn last_active_at(&self) -> DateTime<Utc> {
        self.last_active_at
    }

    /// Stores `input` as the pending input. Replaces any unconsumed input.
    pub fn submit_input(&mut self, input: UserEntry, clock: &dyn Clock) {
        self.pending_input = Some(input);
        self.touch(clock);
    }

    /// Removes and returns the pending input.
    pub fn take_pending_input(&mut self) -> Option<UserEntry> {
        self.pending_input.take()
    }

    /// Appends a completed turn's entries and advances the stage by one.
    pub(crate) fn complete_turn(&mut self, entries: Vec<LogEntry>, clock: &dyn Clock) {
        self.log.extend(entries);
        self.stage = self.stage.transition().next;
        self.touch(clock);
    }

    /// Clears the log, the pending input and the stage.
    pub fn reset(&mut self, clock: &dyn Clock) {
        self.stage = Stage::Initial;
        self.pending_input = None;
        self.log.clear();
        self.touch(clock);
    }

    /// Records activity at the current time.
    pub fn touch(&mut self, clock: &dyn Clock) {
        self.last_active_at = clock.now();
    }
}
