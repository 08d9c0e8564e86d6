//! Content generation adapter.

use async_trait::async_trait;
use pathways_core::error::DomainError;
use pathways_core::generation::{TextGenerator, TextRequest};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::WorqhatConfig;

#[derive(Debug, Serialize)]
struct ContentRequestBody<'a> {
    question: &'a str,
    model: &'a str,
    randomness: f64,
    stream_data: bool,
    training_data: &'a str,
    response_type: &'a str,
}

impl<'a> From<&'a TextRequest> for ContentRequestBody<'a> {
    fn from(request: &'a TextRequest) -> Self {
        Self {
            question: &request.prompt_text,
            model: &request.model_id,
            randomness: request.randomness,
            stream_data: request.streaming,
            training_data: &request.instruction_template,
            response_type: request.response_format.as_str(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentResponseBody {
    content: Option<serde_json::Value>,
}

/// `TextGenerator` backed by the hosted content generation endpoint.
#[derive(Clone)]
pub struct WorqhatTextGenerator {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for WorqhatTextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorqhatTextGenerator")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl WorqhatTextGenerator {
    /// Creates an adapter that posts to `config.content_url`.
    #[must_use]
    pub fn new(client: Client, config: &WorqhatConfig) -> Self {
        Self {
            client,
            endpoint: config.content_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for WorqhatTextGenerator {
    async fn generate(&self, request: &TextRequest) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ContentRequestBody::from(request))
            .send()
            .await
            .map_err(|e| DomainError::GenerationNetwork(format!("content request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::GenerationNetwork(format!(
                "content service returned {status}"
            )));
        }

        let body: ContentResponseBody = response.json().await.map_err(|e| {
            DomainError::GenerationParse(format!("content response is not valid JSON: {e}"))
        })?;
        debug!(model = %request.model_id, "content service responded");

        match body.content {
            Some(serde_json::Value::String(document)) => Ok(document),
            // Some deployments return the document already decoded.
            Some(value @ (serde_json::Value::Object(_) | serde_json::Value::Array(_))) => {
                Ok(value.to_string())
            }
            _ => Err(DomainError::GenerationParse(
                "content response has no content document".into(),
            )),
        }
    }
}
