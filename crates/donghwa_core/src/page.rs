//! A single storybook page.

use crate::EncodedImage;
use serde::{Deserialize, Serialize};

/// One parsed page of a generated story.
///
/// Pages are created once by the parser and are immutable afterwards;
/// [`StoryPage::with_image`] produces the illustrated copy.
///
/// # Examples
///
/// ```
/// use donghwa_core::StoryPage;
///
/// let page = StoryPage::new(
///     "1. 페이지 (삽화: 구름 위의 작은 집)".to_string(),
///     Some("구름 위의 작은 집".to_string()),
///     "옛날 옛적에...".to_string(),
/// );
///
/// assert!(page.illustration().is_some());
/// assert!(page.image().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryPage {
    /// The marker-and-clause prefix of the page block
    title: String,
    /// Scene description extracted from the illustration clause
    illustration: Option<String>,
    /// Narrative body text with the marker clause stripped
    body: String,
    /// Generated illustration, present only when image generation succeeded
    image: Option<EncodedImage>,
}

impl StoryPage {
    /// Creates a page without an image.
    pub fn new(title: String, illustration: Option<String>, body: String) -> Self {
        Self {
            title,
            illustration,
            body,
            image: None,
        }
    }

    /// Attaches a generated illustration to this page.
    pub fn with_image(mut self, image: EncodedImage) -> Self {
        self.image = Some(image);
        self
    }
}
