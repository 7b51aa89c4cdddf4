//! HTTP surface and request pipeline for the Donghwa storybook service.
//!
//! One linear pipeline per request: validate the topic, generate story
//! text, parse it into pages, illustrate each page sequentially, render
//! HTML. Only the text-generation and zero-page paths are fatal; every
//! illustration failure degrades to a page without an image.

mod api;
mod pipeline;
mod render;

pub use api::{AppState, GenerateForm, create_router};
pub use pipeline::generate_story;
pub use render::{render_error, render_index, render_story};
