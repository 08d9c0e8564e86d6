//! Ports to the generative collaborators.
//!
//! The conversation core talks to the text-generation and image-generation
//! services only through these traits. Request types are wire-neutral; the
//! infrastructure adapters translate them into the services' own formats.

use async_trait::async_trait;

use crate::error::DomainError;

/// Randomness level used for every text-generation request.
pub const DEFAULT_RANDOMNESS: f64 = 0.5;

/// Format the text collaborator is asked to answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// A JSON-encoded document.
    Json,
}

impl ResponseFormat {
    /// Wire name of the format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
        }
    }
}

/// A structured request to the text-generation collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    /// The user's raw text.
    pub prompt_text: String,
    /// Model identifier understood by the collaborator.
    pub model_id: String,
    /// Sampling randomness.
    pub randomness: f64,
    /// Whether the answer should be streamed. Always `false` here.
    pub streaming: bool,
    /// Stage-specific fixed instruction template.
    pub instruction_template: String,
    /// Requested response format.
    pub response_format: ResponseFormat,
}

/// Rendering style requested from the image collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStyle {
    /// Anime illustration style.
    Anime,
}

impl ImageStyle {
    /// Wire name of the style.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anime => "Anime",
        }
    }
}

/// Image orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrientation {
    /// Square canvas.
    Square,
}

impl ImageOrientation {
    /// Wire name of the orientation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "Square",
        }
    }
}

/// How the generated image is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutput {
    /// A hosted URL.
    Url,
}

impl ImageOutput {
    /// Wire name of the output type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
        }
    }
}

/// A request to the image-generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Image descriptions. Exactly one per request in this system.
    pub prompts: Vec<String>,
    /// Rendering style.
    pub style: ImageStyle,
    /// Orientation.
    pub orientation: ImageOrientation,
    /// Output format.
    pub output: ImageOutput,
}

impl ImageRequest {
    /// Builds the request for a single image description with the fixed
    /// style, orientation and output parameters.
    #[must_use]
    pub fn for_description(description: impl Into<String>) -> Self {
        Self {
            prompts: vec![description.into()],
            style: ImageStyle::Anime,
            orientation: ImageOrientation::Square,
            output: ImageOutput::Url,
        }
    }

    /// The first (and only) description carried by the request.
    #[must_use]
    pub fn description(&self) -> &str {
        self.prompts.first().map_or("", String::as_str)
    }
}

/// Text-generation collaborator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends the request and returns the raw document the collaborator
    /// produced (a JSON string when `response_format` is JSON).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GenerationNetwork` on transport failure and
    /// `DomainError::GenerationParse` when the response envelope is malformed.
    async fn generate(&self, request: &TextRequest) -> Result<String, DomainError>;
}

/// Image-generation collaborator.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates one image and returns its URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ImageEnrichment` on any failure.
    async fn generate_image(&self, request: &ImageRequest) -> Result<String, DomainError>;
}
