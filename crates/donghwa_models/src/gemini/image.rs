//! Image-generation client for page illustrations.

use crate::gemini::{GeminiConfig, GenerateContentRequest, http_client, send};
use async_trait::async_trait;
use base64::Engine;
use donghwa_core::{EncodedImage, Illustrator};
use donghwa_error::{GeminiError, GeminiErrorKind};
use reqwest::Client;
use tracing::{debug, instrument};

/// Client for the Gemini image-generation model.
///
/// A response without inline image data is `Ok(None)`, not an error; the
/// pipeline treats transport errors per page.
#[derive(Debug, Clone)]
pub struct GeminiImageClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiImageClient {
    /// Creates a new image client from an injected configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        Ok(Self {
            client: http_client()?,
            config,
        })
    }

    /// Generates an illustration for the given prompt.
    ///
    /// Searches candidates in order and takes the first part with inline
    /// image data. The payload is validated as base64 before it is passed
    /// on for embedding.
    #[instrument(skip(self, prompt), fields(model = %self.config.image_model()))]
    pub async fn generate(&self, prompt: &str) -> Result<Option<EncodedImage>, GeminiError> {
        let request = GenerateContentRequest::image(prompt);
        let response =
            send(&self.client, &self.config, self.config.image_model(), &request).await?;

        let Some(inline) = response.first_inline_image() else {
            debug!("Response carried no inline image data");
            return Ok(None);
        };

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;

        debug!(
            bytes = bytes.len(),
            mime = inline.mime_type.as_deref().unwrap_or("unknown"),
            "Decoded inline image"
        );

        Ok(Some(EncodedImage::from_bytes(
            &bytes,
            inline.mime_type.clone(),
        )))
    }
}

#[async_trait]
impl Illustrator for GeminiImageClient {
    async fn illustrate(&self, prompt: &str) -> Result<Option<EncodedImage>, GeminiError> {
        self.generate(prompt).await
    }
}
