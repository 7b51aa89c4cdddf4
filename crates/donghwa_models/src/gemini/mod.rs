//! Gemini `generateContent` clients for story text and illustrations.

mod config;
mod dto;
mod image;
mod text;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, GeminiConfig, GeminiConfigBuilder,
};
pub use dto::{GenerateContentRequest, GenerateContentResponse, InlineData};
pub use image::GeminiImageClient;
pub use text::GeminiTextClient;

use donghwa_error::{GeminiError, GeminiErrorKind};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Bounded timeout for a single upstream call; a hung upstream must not
/// block the request forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Builds the shared HTTP client with the bounded request timeout.
pub(crate) fn http_client() -> Result<Client, GeminiError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))
}

/// Sends one `generateContent` request and deserializes the response.
///
/// Shared by the text and image clients; no retries are performed.
pub(crate) async fn send(
    client: &Client,
    config: &GeminiConfig,
    model: &str,
    request: &GenerateContentRequest,
) -> Result<GenerateContentResponse, GeminiError> {
    let url = format!("{}/models/{}:generateContent", config.base_url(), model);

    debug!(model = %model, "Sending generateContent request");

    let response = client
        .post(&url)
        .header("x-goog-api-key", config.api_key())
        .json(request)
        .send()
        .await
        .map_err(|e| {
            error!(model = %model, error = ?e, "HTTP request failed");
            GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
        })?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        error!(model = %model, status = %status, error = %message, "API error");

        return Err(GeminiError::new(GeminiErrorKind::HttpError {
            status_code: status.as_u16(),
            message,
        }));
    }

    let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
        error!(model = %model, error = ?e, "Failed to parse response");
        GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string()))
    })?;

    debug!(
        model = %model,
        candidates = parsed.candidates.len(),
        "Received response"
    );

    Ok(parsed)
}
