//! Content generation client.
//!
//! Sends the user's text together with the stage's instruction template to
//! the text collaborator and parses the returned JSON document into the
//! stage's item shape. Nothing here retries; a failed call is reported to
//! the caller as-is.

use std::sync::Arc;

use pathways_core::error::DomainError;
use pathways_core::generation::{DEFAULT_RANDOMNESS, ResponseFormat, TextGenerator, TextRequest};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::prompts::instructions_for;
use crate::domain::entries::{DetailItem, PathItem, TimelineItem};
use crate::domain::stage::StageKind;

/// Model used when none is configured.
pub const DEFAULT_MODEL_ID: &str = "aicon-v4-alpha-160824";

/// Parsed content for one turn, before illustration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutput {
    /// Alternative career paths.
    Paths(Vec<PathItem>),
    /// A single detailed answer.
    Detail(DetailItem),
    /// Timeline milestones.
    Timeline(Vec<TimelineItem>),
}

#[derive(Debug, Deserialize)]
struct PathsDocument {
    career_paths: Vec<PathItem>,
}

#[derive(Debug, Deserialize)]
struct DetailDocument {
    input: String,
}

#[derive(Debug, Deserialize)]
struct TimelineDocument {
    timelines: Vec<TimelineItem>,
}

/// Client for the text-generation collaborator.
#[derive(Clone)]
pub struct ContentGenerationClient {
    generator: Arc<dyn TextGenerator>,
    model_id: String,
}

impl std::fmt::Debug for ContentGenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentGenerationClient")
            .field("model_id", &self.model_id)
            .finish_non_exhaustive()
    }
}

impl ContentGenerationClient {
    /// Creates a client that asks `generator` for content using `model_id`.
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, model_id: impl Into<String>) -> Self {
        Self {
            generator,
            model_id: model_id.into(),
        }
    }

    /// Builds the request sent for `kind`.
    #[must_use]
    pub fn request_for(&self, kind: StageKind, user_text: &str) -> TextRequest {
        TextRequest {
            prompt_text: user_text.to_owned(),
            model_id: self.model_id.clone(),
            randomness: DEFAULT_RANDOMNESS,
            streaming: false,
            instruction_template: instructions_for(kind).to_owned(),
            response_format: ResponseFormat::Json,
        }
    }

    /// Generates and parses the content for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GenerationNetwork` if the collaborator call
    /// fails and `DomainError::GenerationParse` if its document is not JSON
    /// or lacks the key expected for `kind`.
    pub async fn generate(
        &self,
        kind: StageKind,
        user_text: &str,
    ) -> Result<StageOutput, DomainError> {
        let request = self.request_for(kind, user_text);
        let document = self.generator.generate(&request).await?;
        parse_document(kind, &document)
    }
}

/// Parses a collaborator document into the shape expected for `kind`.
///
/// # Errors
///
/// Returns `DomainError::GenerationParse` if `document` is not JSON or does
/// not match the expected shape.
pub fn parse_document(kind: StageKind, document: &str) -> Result<StageOutput, DomainError> {
    let value: serde_json::Value = serde_json::from_str(document).map_err(|e| {
        DomainError::GenerationParse(format!("{} response is not valid JSON: {e}", kind.as_str()))
    })?;

    match kind {
        StageKind::Paths => {
            let document: PathsDocument = decode(kind, value)?;
            Ok(StageOutput::Paths(document.career_paths))
        }
        StageKind::Detail => {
            let document: DetailDocument = decode(kind, value)?;
            Ok(StageOutput::Detail(DetailItem {
                detail_text: document.input,
            }))
        }
        StageKind::Timeline => {
            let document: TimelineDocument = decode(kind, value)?;
            Ok(StageOutput::Timeline(document.timelines))
        }
    }
}

fn decode<T: DeserializeOwned>(kind: StageKind, value: serde_json::Value) -> Result<T, DomainError> {
    serde_json::from_value(value).map_err(|e| {
        DomainError::GenerationParse(format!("unexpected {} document: {e}", kind.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathways_core::error::DomainError;
    use pathways_test_support::{
        FailingTextGenerator, ScriptedTextGenerator, detail_document, paths_document,
        timeline_document,
    };

    use crate::application::prompts::{DETAIL_INSTRUCTIONS, PATHS_INSTRUCTIONS};

    #[tokio::test]
    async fn test_generate_paths_sends_stage_request_and_parses_items() {
        // Arrange
        let generator = Arc::new(ScriptedTextGenerator::succeeding(vec![paths_document(&[
            "a studio", "a lab", "a rooftop",
        ])]));
        let client = ContentGenerationClient::new(generator.clone(), DEFAULT_MODEL_ID);

        // Act
        let output = client
            .generate(StageKind::Paths, "I like design and math")
            .await
            .unwrap();

        // Assert
        match output {
            StageOutput::Paths(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[1].image_description, "a lab");
            }
            other => panic!("expected Paths, got {other:?}"),
        }

        let requests = generator.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.prompt_text, "I like design and math");
        assert_eq!(request.model_id, DEFAULT_MODEL_ID);
        assert!((request.randomness - 0.5).abs() < f64::EPSILON);
        assert!(!request.streaming);
        assert_eq!(request.instruction_template, PATHS_INSTRUCTIONS);
        assert_eq!(request.response_format, ResponseFormat::Json);
    }

    #[tokio::test]
    async fn test_generate_detail_uses_detail_template() {
        let generator = Arc::new(ScriptedTextGenerator::succeeding(vec![detail_document(
            "Architects need a licence.",
        )]));
        let client = ContentGenerationClient::new(generator.clone(), DEFAULT_MODEL_ID);

        let output = client
            .generate(StageKind::Detail, "Tell me more about the second one")
            .await
            .unwrap();

        assert_eq!(
            output,
            StageOutput::Detail(DetailItem {
                detail_text: "Architects need a licence.".into()
            })
        );
        assert_eq!(generator.requests()[0].instruction_template, DETAIL_INSTRUCTIONS);
    }

    #[tokio::test]
    async fn test_generate_propagates_network_error() {
        let client =
            ContentGenerationClient::new(Arc::new(FailingTextGenerator::default()), DEFAULT_MODEL_ID);

        let result = client.generate(StageKind::Timeline, "Plan it").await;

        match result {
            Err(DomainError::GenerationNetwork(_)) => {}
            other => panic!("expected GenerationNetwork, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_document_rejects_invalid_json() {
        match parse_document(StageKind::Paths, "not json at all") {
            Err(DomainError::GenerationParse(message)) => {
                assert!(message.contains("not valid JSON"));
            }
            other => panic!("expected GenerationParse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_document_rejects_missing_top_level_key() {
        // A timeline document where paths were expected.
        let document = timeline_document(&["a desk"]);

        match parse_document(StageKind::Paths, &document) {
            Err(DomainError::GenerationParse(message)) => {
                assert!(message.contains("career_paths"));
            }
            other => panic!("expected GenerationParse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_document_reads_timeline_items_in_order() {
        let document = timeline_document(&["first desk", "second desk"]);

        let output = parse_document(StageKind::Timeline, &document).unwrap();

        match output {
            StageOutput::Timeline(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].step, "Step 1");
                assert_eq!(items[1].image_description, "second desk");
                assert_eq!(items[0].resources, vec!["Coursera", "GitHub"]);
            }
            other => panic!("expected Timeline, got {other:?}"),
        }
    }
}
