//! Text-generation client for story prose.

use crate::gemini::{GeminiConfig, GenerateContentRequest, http_client, send};
use async_trait::async_trait;
use donghwa_core::StoryTeller;
use donghwa_error::{GeminiError, GeminiErrorKind};
use reqwest::Client;
use tracing::instrument;

/// Client for the Gemini text-generation model.
///
/// One call per story; a failed call fails the whole request, so there is
/// no retry logic here.
#[derive(Debug, Clone)]
pub struct GeminiTextClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiTextClient {
    /// Creates a new text client from an injected configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        Ok(Self {
            client: http_client()?,
            config,
        })
    }

    /// Generates story text for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::EmptyResponse`] when the model answers
    /// with no text, and the transport error kinds otherwise.
    #[instrument(skip(self, prompt), fields(model = %self.config.text_model()))]
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::text(prompt);
        let response = send(&self.client, &self.config, self.config.text_model(), &request).await?;

        let text = response.text().trim().to_string();
        if text.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
        }

        Ok(text)
    }
}

#[async_trait]
impl StoryTeller for GeminiTextClient {
    async fn tell(&self, prompt: &str) -> Result<String, GeminiError> {
        self.generate(prompt).await
    }
}
