//! The story generation pipeline.

use donghwa_core::{Illustrator, Story, StoryTeller, illustration_prompt, parse_pages, story_prompt};
use donghwa_error::{DonghwaResult, StoryError, StoryErrorKind};
use tracing::{debug, instrument, warn};

/// Runs one story request end to end.
///
/// Explicit `Result` return instead of a catch-everything boundary: the
/// caller pattern-matches on success vs. named failure kind. Per-page
/// illustration failures never escape this function; they degrade that
/// page's image to absent.
///
/// # Errors
///
/// - [`StoryErrorKind::EmptyTopic`] for an empty or whitespace-only topic,
///   before any upstream call is made.
/// - Any `GeminiError` from the text model, unchanged (fatal).
/// - [`StoryErrorKind::NoPages`] when parsing yields zero page records.
#[instrument(skip(teller, illustrator), fields(topic_len = topic.len()))]
pub async fn generate_story(
    topic: &str,
    teller: &dyn StoryTeller,
    illustrator: &dyn Illustrator,
) -> DonghwaResult<Story> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(StoryError::new(StoryErrorKind::EmptyTopic).into());
    }

    let raw = teller.tell(&story_prompt(topic)).await?;

    let pages = parse_pages(&raw);
    if pages.is_empty() {
        return Err(StoryError::new(StoryErrorKind::NoPages).into());
    }
    debug!(pages = pages.len(), "Parsed story pages");

    // Sequential by design: no fan-out across pages.
    let mut illustrated = Vec::with_capacity(pages.len());
    for page in pages {
        let image = match page.illustration() {
            Some(description) => {
                match illustrator.illustrate(&illustration_prompt(description)).await {
                    Ok(image) => image,
                    Err(e) => {
                        warn!(error = %e, "Illustration failed, page continues without image");
                        None
                    }
                }
            }
            None => None,
        };

        illustrated.push(match image {
            Some(image) => page.with_image(image),
            None => page,
        });
    }

    Ok(Story::new(topic.to_string(), illustrated))
}
