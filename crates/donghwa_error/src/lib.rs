//! Error types for the Donghwa storybook service.
//!
//! This crate provides the foundation error types used throughout the
//! donghwa workspace. Each failure domain gets its own error struct with
//! source-location capture; the [`DonghwaError`] wrapper unifies them for
//! callers that only need one error type.

mod gemini;
mod story;

pub use gemini::{GeminiError, GeminiErrorKind};
pub use story::{StoryError, StoryErrorKind};

/// Crate-level error variants.
#[derive(Debug, Clone, derive_more::From)]
pub enum DonghwaErrorKind {
    /// Upstream Gemini failure
    Gemini(GeminiError),
    /// Story validation or parse failure
    Story(StoryError),
}

impl std::fmt::Display for DonghwaErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DonghwaErrorKind::Gemini(e) => write!(f, "{}", e),
            DonghwaErrorKind::Story(e) => write!(f, "{}", e),
        }
    }
}

/// Donghwa error with kind discrimination.
#[derive(Debug, Clone)]
pub struct DonghwaError(Box<DonghwaErrorKind>);

impl DonghwaError {
    /// Create a new error from a kind.
    pub fn new(kind: DonghwaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DonghwaErrorKind {
        &self.0
    }

    /// Human-readable message without source-location noise, suitable for
    /// rendering to an end user.
    ///
    /// # Examples
    ///
    /// ```
    /// use donghwa_error::{DonghwaError, StoryError, StoryErrorKind};
    ///
    /// let err = DonghwaError::from(StoryError::new(StoryErrorKind::EmptyTopic));
    /// assert_eq!(err.user_message(), "Story topic is empty");
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            DonghwaErrorKind::Gemini(e) => e.kind.to_string(),
            DonghwaErrorKind::Story(e) => e.kind.to_string(),
        }
    }
}

impl std::fmt::Display for DonghwaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Donghwa Error: {}", self.0)
    }
}

impl std::error::Error for DonghwaError {}

// Generic From implementation for any type that converts to DonghwaErrorKind
impl<T> From<T> for DonghwaError
where
    T: Into<DonghwaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Donghwa operations.
pub type DonghwaResult<T> = std::result::Result<T, DonghwaError>;
