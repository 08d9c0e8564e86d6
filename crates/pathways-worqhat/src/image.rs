//! Image generation adapter.

use async_trait::async_trait;
use pathways_core::error::DomainError;
use pathways_core::generation::{ImageGenerator, ImageRequest};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::client::WorqhatConfig;

#[derive(Debug, Serialize)]
struct ImageRequestBody<'a> {
    prompt: &'a [String],
    image_style: &'a str,
    orientation: &'a str,
    output_type: &'a str,
}

impl<'a> From<&'a ImageRequest> for ImageRequestBody<'a> {
    fn from(request: &'a ImageRequest) -> Self {
        Self {
            prompt: &request.prompts,
            image_style: request.style.as_str(),
            orientation: request.orientation.as_str(),
            output_type: request.output.as_str(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImageResponseBody {
    image: Option<String>,
}

/// `ImageGenerator` backed by the hosted image generation endpoint.
#[derive(Clone)]
pub struct WorqhatImageGenerator {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for WorqhatImageGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorqhatImageGenerator")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl WorqhatImageGenerator {
    /// Creates an adapter that posts to `config.image_url`.
    #[must_use]
    pub fn new(client: Client, config: &WorqhatConfig) -> Self {
        Self {
            client,
            endpoint: config.image_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl ImageGenerator for WorqhatImageGenerator {
    async fn generate_image(&self, request: &ImageRequest) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ImageRequestBody::from(request))
            .send()
            .await
            .map_err(|e| DomainError::ImageEnrichment(format!("image request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::ImageEnrichment(format!(
                "image service returned {status}"
            )));
        }

        let body: ImageResponseBody = response.json().await.map_err(|e| {
            DomainError::ImageEnrichment(format!("image response is not valid JSON: {e}"))
        })?;

        body.image
            .filter(|url| !url.is_empty())
            .ok_or_else(|| DomainError::ImageEnrichment("image response has no image URL".into()))
    }
}
