//! Fake `ImageGenerator` implementations for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use pathways_core::error::DomainError;
use pathways_core::generation::{ImageGenerator, ImageRequest};

/// The URL the fake generators return for `description`.
#[must_use]
pub fn image_url_for(description: &str) -> String {
    format!("https://images.test/{}.png", description.replace(' ', "-"))
}

/// An image generator that always succeeds with [`image_url_for`].
#[derive(Debug, Default)]
pub struct StaticImageGenerator;

#[async_trait]
impl ImageGenerator for StaticImageGenerator {
    async fn generate_image(&self, request: &ImageRequest) -> Result<String, DomainError> {
        Ok(image_url_for(request.description()))
    }
}

/// An image generator that always fails.
#[derive(Debug, Default)]
pub struct FailingImageGenerator;

#[async_trait]
impl ImageGenerator for FailingImageGenerator {
    async fn generate_image(&self, _request: &ImageRequest) -> Result<String, DomainError> {
        Err(DomainError::ImageEnrichment("service unavailable".into()))
    }
}

/// An image generator that fails for chosen descriptions, can hold back
/// chosen descriptions to force out-of-order completion, and records the
/// order in which requests complete.
#[derive(Debug, Default)]
pub struct SelectiveImageGenerator {
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    completed: Mutex<Vec<String>>,
}

impl SelectiveImageGenerator {
    /// Create a generator that succeeds for every description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every request for `description`.
    #[must_use]
    pub fn failing_on(mut self, description: &str) -> Self {
        self.failing.insert(description.to_owned());
        self
    }

    /// Delay every request for `description` by `delay`.
    #[must_use]
    pub fn delaying(mut self, description: &str, delay: Duration) -> Self {
        self.delays.insert(description.to_owned(), delay);
        self
    }

    /// Descriptions in the order their requests settled.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for SelectiveImageGenerator {
    async fn generate_image(&self, request: &ImageRequest) -> Result<String, DomainError> {
        let description = request.description().to_owned();
        if let Some(delay) = self.delays.get(&description) {
            tokio::time::sleep(*delay).await;
        }
        self.completed.lock().unwrap().push(description.clone());

        if self.failing.contains(&description) {
            Err(DomainError::ImageEnrichment(format!(
                "rejected prompt: {description}"
            )))
        } else {
            Ok(image_url_for(&description))
        }
    }
}
