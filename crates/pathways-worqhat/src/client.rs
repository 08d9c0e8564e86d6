//! Shared HTTP client configuration.

use std::time::Duration;

/// Default endpoint of the content generation service.
pub const DEFAULT_CONTENT_URL: &str = "https://api.worqhat.com/api/ai/content/v4";

/// Default endpoint of the image generation service.
pub const DEFAULT_IMAGE_URL: &str = "https://api.worqhat.com/api/ai/images/generate/v2";

/// Default per-call timeout for both services.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings for the hosted generation services.
#[derive(Clone)]
pub struct WorqhatConfig {
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Content generation endpoint.
    pub content_url: String,
    /// Image generation endpoint.
    pub image_url: String,
    /// Per-call timeout.
    pub timeout: Duration,
}

impl WorqhatConfig {
    /// Settings using the default endpoints and timeout.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            content_url: DEFAULT_CONTENT_URL.to_owned(),
            image_url: DEFAULT_IMAGE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for WorqhatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorqhatConfig")
            .field("api_key", &"<redacted>")
            .field("content_url", &self.content_url)
            .field("image_url", &self.image_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builds the HTTP client shared by both adapters.
///
/// # Errors
///
/// Returns the underlying `reqwest::Error` if the TLS backend cannot be
/// initialised.
pub fn build_http_client(config: &WorqhatConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(config.timeout).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_redacts_api_key() {
        let config = WorqhatConfig::new("sk-secret");

        let debug = format!("{config:?}");

        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains(DEFAULT_CONTENT_URL));
    }
}
