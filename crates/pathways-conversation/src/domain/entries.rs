//! Conversation log entries and the items they carry.

use pathways_core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};

/// Message substituted for an image that could not be generated.
pub const IMAGE_FAILURE_MESSAGE: &str =
    "An error occurred in image generation. Please try again later.";

/// Text submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserEntry {
    /// The submitted text, as typed.
    pub text: String,
}

impl UserEntry {
    /// Validates and wraps user text.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the text is empty or whitespace.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::Validation("user input is required".into()));
        }
        Ok(Self { text })
    }
}

/// One alternative career path.
///
/// Fields missing from a generated item read as empty so the rest of the
/// batch survives; an empty `image_description` yields an error marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathItem {
    /// The "What if you..." hook.
    pub what_if: String,
    /// Story-like description of the path.
    pub narrative: String,
    /// Prompt for the path's illustration.
    pub image_description: String,
}

/// An in-depth answer. Never illustrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailItem {
    /// The answer text.
    pub detail_text: String,
}

/// One milestone of a career timeline. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineItem {
    /// Short milestone title.
    pub step: String,
    /// What the milestone involves.
    pub description: String,
    /// Estimated time to complete. A bare number is kept as its text.
    #[serde(deserialize_with = "text_or_number")]
    pub duration: String,
    /// Suggested tools, platforms or certifications.
    #[serde(deserialize_with = "one_or_many")]
    pub resources: Vec<String>,
    /// Prompt for the milestone's illustration.
    #[serde(alias = "image_prompt")]
    pub image_description: String,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(resource) => vec![resource],
        OneOrMany::Many(resources) => resources,
    })
}

/// Items that carry a prompt for an illustration.
pub trait Illustrated {
    /// The description sent to the image collaborator.
    fn image_description(&self) -> &str;
}

impl Illustrated for PathItem {
    fn image_description(&self) -> &str {
        &self.image_description
    }
}

impl Illustrated for TimelineItem {
    fn image_description(&self) -> &str {
        &self.image_description
    }
}

/// Placeholder for content that failed to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMarker {
    /// Generic, user-facing failure message.
    pub error_message: String,
}

impl ErrorMarker {
    /// The marker used for a failed illustration.
    #[must_use]
    pub fn image_failure() -> Self {
        Self {
            error_message: IMAGE_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Outcome of a single illustration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSlot {
    /// URL of the generated image.
    Url(String),
    /// The request failed.
    Error(ErrorMarker),
}

impl ImageSlot {
    /// Returns the URL if the illustration succeeded.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Error(_) => None,
        }
    }

    /// Whether the slot holds an error marker.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// A generated item paired with its illustration outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedItem<T> {
    /// The generated item.
    #[serde(flatten)]
    pub item: T,
    /// The illustration, or the marker that replaced it.
    pub image: ImageSlot,
}

/// Content produced by the service for a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BotEntry {
    /// An illustrated career path.
    Path(EnrichedItem<PathItem>),
    /// A detailed answer.
    Detail(DetailItem),
    /// An illustrated timeline milestone.
    Timeline(EnrichedItem<TimelineItem>),
}

impl BotEntry {
    /// The illustration slot, for illustrated entries.
    #[must_use]
    pub fn image(&self) -> Option<&ImageSlot> {
        match self {
            Self::Path(enriched) => Some(&enriched.image),
            Self::Timeline(enriched) => Some(&enriched.image),
            Self::Detail(_) => None,
        }
    }
}

/// A single record of the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum LogEntry {
    /// Something the user said.
    User(UserEntry),
    /// Something the service produced.
    Bot(BotEntry),
}

impl LogEntry {
    /// Whether the entry was written by the user.
    #[must_use]
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User(_))
    }
}
