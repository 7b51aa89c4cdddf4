//! Encoded image payloads for generated illustrations.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// A base64-encoded image, ready to embed in an HTML `data:` URI.
///
/// # Examples
///
/// ```
/// use donghwa_core::EncodedImage;
///
/// let image = EncodedImage::from_bytes(b"png bytes", Some("image/png".to_string()));
/// assert!(image.data_uri().starts_with("data:image/png;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct EncodedImage {
    /// Base64-encoded image bytes
    data: String,
    /// MIME type of the image, if the upstream reported one
    mime: Option<String>,
}

impl EncodedImage {
    /// Creates an encoded image from an already base64-encoded payload.
    pub fn new(data: String, mime: Option<String>) -> Self {
        Self { data, mime }
    }

    /// Encodes raw image bytes as base64.
    pub fn from_bytes(bytes: &[u8], mime: Option<String>) -> Self {
        let data = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self { data, mime }
    }

    /// Renders the image as a `data:` URI for inline embedding.
    ///
    /// Falls back to `image/png` when the upstream did not report a MIME type.
    pub fn data_uri(&self) -> String {
        let mime = self.mime.as_deref().unwrap_or("image/png");
        format!("data:{};base64,{}", mime, self.data)
    }
}
