//! Configuration for the Gemini API connection.

use derive_getters::Getters;
use donghwa_error::{GeminiError, GeminiErrorKind};

/// Default model for story text generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
/// Default model for illustration generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini API connection.
///
/// The credential is injected here once at startup; clients never read the
/// process environment at call time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key for authentication
    api_key: String,
    /// Model identifier for text generation
    #[builder(default = "DEFAULT_TEXT_MODEL.to_string()")]
    text_model: String,
    /// Model identifier for image generation
    #[builder(default = "DEFAULT_IMAGE_MODEL.to_string()")]
    image_model: String,
    /// Base URL of the API (e.g., "https://generativelanguage.googleapis.com/v1beta")
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
}

impl GeminiConfig {
    /// Returns a builder for constructing a GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (required)
    /// - `DONGHWA_TEXT_MODEL` (default: "gemini-2.5-flash")
    /// - `DONGHWA_IMAGE_MODEL` (default: "gemini-2.5-flash-image")
    /// - `DONGHWA_BASE_URL` (default: Google generative language endpoint)
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        let text_model =
            std::env::var("DONGHWA_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());
        let image_model = std::env::var("DONGHWA_IMAGE_MODEL")
            .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());
        let base_url =
            std::env::var("DONGHWA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(GeminiConfigBuilder::default()
            .api_key(api_key)
            .text_model(text_model)
            .image_model(image_model)
            .base_url(base_url)
            .build()
            .expect("Valid GeminiConfig"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let config = GeminiConfig::builder()
            .api_key("test-key")
            .build()
            .expect("Valid GeminiConfig");

        assert_eq!(config.text_model(), DEFAULT_TEXT_MODEL);
        assert_eq!(config.image_model(), DEFAULT_IMAGE_MODEL);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }
}
