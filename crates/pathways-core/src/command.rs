//! Command abstractions.

use uuid::Uuid;

/// Trait that all boundary commands implement.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// The type name for this command (for logging).
    fn command_type(&self) -> &'static str;

    /// Correlation ID to trace this command through the system.
    fn correlation_id(&self) -> Uuid;

    /// The conversation session the command targets.
    fn session_id(&self) -> Uuid;
}
