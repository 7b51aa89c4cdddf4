//! Core data types for the Donghwa storybook service.
//!
//! This crate provides the story data model, prompt construction, and the
//! parser that turns raw model output into page records. The generator
//! traits at the upstream seam also live here so that consumers can run
//! against mock backends.

mod image;
mod page;
mod parser;
mod prompt;
mod story;
mod traits;

pub use image::EncodedImage;
pub use page::StoryPage;
pub use parser::parse_pages;
pub use prompt::{PAGE_COUNT, illustration_prompt, story_prompt};
pub use story::Story;
pub use traits::{Illustrator, StoryTeller};
