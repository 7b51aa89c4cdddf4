//! Gemini provider integration for the Donghwa storybook service.
//!
//! Provides the configuration type plus the text and image clients that
//! implement the generator traits from `donghwa_core` over the Gemini
//! `generateContent` REST endpoint.

pub mod gemini;

pub use gemini::{GeminiConfig, GeminiConfigBuilder, GeminiImageClient, GeminiTextClient};
