//! Data transfer objects for the Gemini `generateContent` wire format.
//!
//! Endpoint:
//!   POST {base_url}/models/{model}:generateContent
//! Auth:
//!   x-goog-api-key: <API_KEY>
//!
//! Image generation uses the same endpoint with
//! `generationConfig.responseModalities: ["TEXT", "IMAGE"]` and returns
//! `inlineData` parts carrying base64 image bytes.

use serde::{Deserialize, Serialize};

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents; a single user turn for this service
    pub contents: Vec<Content>,
    /// Generation options, only set for image requests
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Builds a plain text-generation request from one prompt.
    pub fn text(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: None,
        }
    }

    /// Builds an image-generation request from one prompt.
    pub fn image(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            }),
        }
    }
}

/// One content entry in the request.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Parts making up this content entry
    pub parts: Vec<Part>,
}

/// A text part of a request content entry.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    /// Prompt text
    pub text: String,
}

/// Generation options.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    /// Output modalities the model may answer with
    #[serde(rename = "responseModalities")]
    pub response_modalities: Vec<String>,
}

/// Response body of the `generateContent` endpoint.
///
/// Every level is optional on the wire; absence at any level means "no
/// output of that kind", never a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Ranked candidate outputs
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    ///
    /// Returns an empty string when there is no candidate, no content, or no
    /// text parts; the caller decides whether that is an error.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// First part carrying inline image data, searched in candidate order.
    ///
    /// Short-circuits on the first match; remaining parts are ignored.
    pub fn first_inline_image(&self) -> Option<&InlineData> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .find_map(|part| part.inline_data.as_ref())
    }
}

/// One candidate output.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Candidate content; may be absent when generation was blocked
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Content of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Ordered output parts
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// One output part of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    /// Text payload, if this is a text part
    #[serde(default)]
    pub text: Option<String>,
    /// Inline binary payload, if this is a media part
    #[serde(default, alias = "inlineData")]
    pub inline_data: Option<InlineData>,
}

/// Base64-encoded media payload of a response part.
#[derive(Debug, Clone, Deserialize)]
pub struct InlineData {
    /// MIME type of the payload
    #[serde(default, alias = "mimeType")]
    pub mime_type: Option<String>,
    /// Base64-encoded bytes
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_request_serializes_without_generation_config() {
        let request = GenerateContentRequest::text("안녕");
        let json = serde_json::to_value(&request).expect("serializable request");

        assert_eq!(json["contents"][0]["parts"][0]["text"], "안녕");
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn image_request_sets_response_modalities() {
        let request = GenerateContentRequest::image("노을");
        let json = serde_json::to_value(&request).expect("serializable request");

        assert_eq!(
            json["generationConfig"]["responseModalities"],
            serde_json::json!(["TEXT", "IMAGE"])
        );
    }

    #[test]
    fn response_text_concatenates_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "옛날 " }, { "text": "옛적에" }] }
            }, {
                "content": { "parts": [{ "text": "무시됨" }] }
            }]
        }))
        .expect("valid response");

        assert_eq!(response.text(), "옛날 옛적에");
    }

    #[test]
    fn response_without_candidates_yields_empty_text_and_no_image() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).expect("valid response");

        assert_eq!(response.text(), "");
        assert!(response.first_inline_image().is_none());
    }

    #[test]
    fn first_inline_image_wins_over_later_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "설명" },
                    { "inlineData": { "mimeType": "image/png", "data": "Zmlyc3Q=" } },
                    { "inlineData": { "mimeType": "image/png", "data": "c2Vjb25k" } }
                ] }
            }]
        }))
        .expect("valid response");

        let inline = response.first_inline_image().expect("inline image present");
        assert_eq!(inline.data, "Zmlyc3Q=");
        assert_eq!(inline.mime_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn snake_case_inline_data_alias_is_accepted() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [
                    { "inline_data": { "mime_type": "image/jpeg", "data": "YQ==" } }
                ] }
            }]
        }))
        .expect("valid response");

        let inline = response.first_inline_image().expect("inline image present");
        assert_eq!(inline.mime_type.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn candidate_without_content_is_tolerated() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .expect("valid response");

        assert!(response.first_inline_image().is_none());
        assert_eq!(response.text(), "");
    }
}
