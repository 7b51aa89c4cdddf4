//! Parsing of raw model output into story pages.
//!
//! The text model is asked for blocks of the form
//! `N. 페이지 (삽화: scene description)` followed by body text. Model output
//! is only semi-structured, so every extraction here is best-effort: missing
//! markers or clauses degrade to absent fields, never to a panic.

use crate::StoryPage;
use regex::Regex;
use std::sync::LazyLock;

/// Page boundary marker, e.g. `1. 페이지`.
static PAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s*페이지").expect("valid page marker pattern"));

/// Illustration clause contents: text between `삽화:` and the next `)`.
static ILLUSTRATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"삽화:\s*(.*?)\)").expect("valid illustration pattern"));

/// Shortest leading run through the first `)` plus trailing whitespace.
static LEADING_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^.*?\)\s*").expect("valid leading clause pattern"));

/// Splits raw story text into page records.
///
/// Blocks that trim to nothing are discarded; everything else produces a
/// record, even when the marker or illustration clause is missing. An empty
/// result means the model output carried no usable pages at all.
///
/// # Examples
///
/// ```
/// use donghwa_core::parse_pages;
///
/// let raw = "1. 페이지 (삽화: 노란 구름)\n구름이 떠 있었어요.\n\n2. 페이지 (삽화: 빨간 풍선)\n풍선이 날아갔어요.";
/// let pages = parse_pages(raw);
///
/// assert_eq!(pages.len(), 2);
/// assert_eq!(pages[0].illustration().as_deref(), Some("노란 구름"));
/// assert_eq!(pages[1].body(), "풍선이 날아갔어요.");
/// ```
pub fn parse_pages(raw: &str) -> Vec<StoryPage> {
    split_blocks(raw)
        .into_iter()
        .filter_map(parse_block)
        .collect()
}

/// Splits the text immediately before each page marker, keeping the marker
/// with the following block. The `regex` crate has no lookahead, so the
/// split slices at match offsets instead.
fn split_blocks(raw: &str) -> Vec<&str> {
    let starts: Vec<usize> = PAGE_MARKER.find_iter(raw).map(|m| m.start()).collect();
    if starts.is_empty() {
        return vec![raw];
    }

    let mut blocks = Vec::with_capacity(starts.len() + 1);
    if starts[0] > 0 {
        blocks.push(&raw[..starts[0]]);
    }
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(raw.len());
        blocks.push(&raw[start..end]);
    }
    blocks
}

/// Parses one block into a page record, or `None` for whitespace-only blocks.
fn parse_block(block: &str) -> Option<StoryPage> {
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return None;
    }

    let illustration = ILLUSTRATION
        .captures(block)
        .map(|captures| captures[1].trim().to_string());

    // `)` is ASCII, so the byte index is safe to slice on.
    let (title, body) = match block.find(')') {
        Some(pos) => {
            let title = block[..=pos].trim().to_string();
            let body = LEADING_CLAUSE.replace(block, "").trim().to_string();
            (title, body)
        }
        // No clause at all: first line stands in for the title, the whole
        // block becomes the body.
        None => {
            let title = trimmed.lines().next().unwrap_or_default().trim().to_string();
            (title, trimmed.to_string())
        }
    };

    Some(StoryPage::new(title, illustration, body))
}
