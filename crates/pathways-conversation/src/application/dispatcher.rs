//! Stage dispatcher.
//!
//! Runs one turn for a session: picks the request from the session's stage,
//! generates the content, illustrates it when the stage calls for images,
//! and folds the result into the log. The session is only touched once the
//! whole turn has succeeded; a generation failure leaves stage and log as
//! they were.

use pathways_core::clock::Clock;
use pathways_core::error::DomainError;
use tracing::info;

use super::assembler::{EnrichedOutput, assemble};
use super::enrichment::ImageEnrichment;
use super::generation::{ContentGenerationClient, StageOutput};
use crate::domain::entries::UserEntry;
use crate::domain::session::ConversationSession;

/// Drives conversation turns against the generative collaborators.
#[derive(Debug, Clone)]
pub struct StageDispatcher {
    generation: ContentGenerationClient,
    enrichment: ImageEnrichment,
}

impl StageDispatcher {
    /// Creates a dispatcher over the two collaborator clients.
    #[must_use]
    pub fn new(generation: ContentGenerationClient, enrichment: ImageEnrichment) -> Self {
        Self {
            generation,
            enrichment,
        }
    }

    /// Answers `input` according to the session's current stage and appends
    /// the turn to its log.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GenerationNetwork` or
    /// `DomainError::GenerationParse` if content generation fails. The session
    /// is unchanged in that case.
    pub async fn advance(
        &self,
        session: &mut ConversationSession,
        input: UserEntry,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        let stage = session.stage();
        let transition = stage.transition();

        info!(
            session_id = %session.id,
            stage = stage.index(),
            request = transition.request.as_str(),
            "dispatching conversation turn"
        );

        let output = self
            .generation
            .generate(transition.request, &input.text)
            .await?;
        let enriched = self.enrich(output).await;
        let entries = assemble(input, enriched);
        let appended = entries.len();

        session.complete_turn(entries, clock);

        info!(
            session_id = %session.id,
            stage = session.stage().index(),
            appended,
            "conversation turn completed"
        );

        Ok(())
    }

    async fn enrich(&self, output: StageOutput) -> EnrichedOutput {
        match output {
            StageOutput::Paths(items) => EnrichedOutput::Paths(self.enrichment.enrich(items).await),
            StageOutput::Detail(detail) => EnrichedOutput::Detail(detail),
            StageOutput::Timeline(items) => {
                EnrichedOutput::Timeline(self.enrichment.enrich(items).await)
            }
        }
    }
}
