//! A complete generated story.

use crate::StoryPage;
use serde::{Deserialize, Serialize};

/// The topic plus its ordered sequence of pages.
///
/// Exists only for the duration of one request/response cycle; nothing is
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Story {
    /// The user-supplied topic
    topic: String,
    /// Parsed pages in original order
    pages: Vec<StoryPage>,
}

impl Story {
    /// Creates a new story from a topic and its pages.
    pub fn new(topic: String, pages: Vec<StoryPage>) -> Self {
        Self { topic, pages }
    }
}
