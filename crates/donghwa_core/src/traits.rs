//! Generator traits at the upstream seam.
//!
//! The pipeline depends on these traits rather than on concrete Gemini
//! clients, so tests can substitute mock backends with fake credentials.

use crate::EncodedImage;
use async_trait::async_trait;
use donghwa_error::GeminiError;

/// A text-generation backend that turns a prompt into raw story text.
#[async_trait]
pub trait StoryTeller: Send + Sync {
    /// Generates story text for the given prompt.
    ///
    /// Implementations return the model output trimmed of surrounding
    /// whitespace and fail with
    /// [`GeminiErrorKind::EmptyResponse`](donghwa_error::GeminiErrorKind)
    /// when nothing comes back.
    async fn tell(&self, prompt: &str) -> Result<String, GeminiError>;
}

/// An image-generation backend that turns a prompt into an illustration.
#[async_trait]
pub trait Illustrator: Send + Sync {
    /// Generates an illustration for the given prompt.
    ///
    /// `Ok(None)` means the upstream answered without usable image data,
    /// which is not an error. Transport failures surface as `Err` and are
    /// handled per page by the caller.
    async fn illustrate(&self, prompt: &str) -> Result<Option<EncodedImage>, GeminiError>;
}
