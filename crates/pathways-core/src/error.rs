//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Empty or missing user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// The text-generation collaborator could not be reached or rejected the call.
    #[error("generation request failed: {0}")]
    GenerationNetwork(String),

    /// The text-generation collaborator answered with content that does not
    /// match the shape expected for the stage.
    #[error("generation response could not be parsed: {0}")]
    GenerationParse(String),

    /// A single image request failed. Never aborts a turn.
    #[error("image enrichment failed: {0}")]
    ImageEnrichment(String),
}

impl DomainError {
    /// Returns `true` for failures of the text-generation step.
    #[must_use]
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, Self::GenerationNetwork(_) | Self::GenerationParse(_))
    }
}
