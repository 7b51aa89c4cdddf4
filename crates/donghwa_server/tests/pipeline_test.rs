use async_trait::async_trait;
use donghwa_core::{EncodedImage, Illustrator, StoryTeller};
use donghwa_error::{DonghwaErrorKind, GeminiError, GeminiErrorKind, StoryErrorKind};
use donghwa_server::generate_story;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Teller that returns a fixed script and counts its calls.
struct ScriptedTeller {
    script: String,
    calls: AtomicUsize,
}

impl ScriptedTeller {
    fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoryTeller for ScriptedTeller {
    async fn tell(&self, prompt: &str) -> Result<String, GeminiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(prompt.contains("그림책"));
        Ok(self.script.clone())
    }
}

/// Teller that fails with an empty response.
struct EmptyTeller;

#[async_trait]
impl StoryTeller for EmptyTeller {
    async fn tell(&self, _prompt: &str) -> Result<String, GeminiError> {
        Err(GeminiError::new(GeminiErrorKind::EmptyResponse))
    }
}

/// Illustrator that succeeds, fails, or skips per call, and counts calls.
struct ScriptedIllustrator {
    calls: AtomicUsize,
    /// 1-based call numbers that return an upstream error
    failing_calls: Vec<usize>,
    /// 1-based call numbers that return no image data
    empty_calls: Vec<usize>,
}

impl ScriptedIllustrator {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failing_calls: Vec::new(),
            empty_calls: Vec::new(),
        }
    }

    fn failing_on(mut self, call: usize) -> Self {
        self.failing_calls.push(call);
        self
    }

    fn empty_on(mut self, call: usize) -> Self {
        self.empty_calls.push(call);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Illustrator for ScriptedIllustrator {
    async fn illustrate(&self, prompt: &str) -> Result<Option<EncodedImage>, GeminiError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        assert!(prompt.starts_with("동화책 스타일의 일러스트"));

        if self.failing_calls.contains(&call) {
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: 503,
                message: "overloaded".to_string(),
            }));
        }
        if self.empty_calls.contains(&call) {
            return Ok(None);
        }
        Ok(Some(EncodedImage::new(
            format!("aW1hZ2Ut{call}"),
            Some("image/png".to_string()),
        )))
    }
}

fn three_page_script() -> String {
    "1. 페이지 (삽화: 첫 장면)\n첫 이야기.\n\n\
     2. 페이지 (삽화: 둘째 장면)\n둘째 이야기.\n\n\
     3. 페이지 (삽화: 셋째 장면)\n셋째 이야기.\n"
        .to_string()
}

#[tokio::test]
async fn whitespace_topic_is_rejected_before_any_upstream_call() {
    let teller = ScriptedTeller::new(three_page_script());
    let illustrator = ScriptedIllustrator::new();

    let err = generate_story("   \t  ", &teller, &illustrator)
        .await
        .expect_err("validation error");

    assert!(matches!(
        err.kind(),
        DonghwaErrorKind::Story(e) if e.kind == StoryErrorKind::EmptyTopic
    ));
    assert_eq!(teller.calls(), 0);
    assert_eq!(illustrator.calls(), 0);
}

#[tokio::test]
async fn well_formed_script_produces_illustrated_story() {
    let teller = ScriptedTeller::new(three_page_script());
    let illustrator = ScriptedIllustrator::new();

    let story = generate_story("구름 이야기", &teller, &illustrator)
        .await
        .expect("story");

    assert_eq!(story.topic(), "구름 이야기");
    assert_eq!(story.pages().len(), 3);
    assert_eq!(illustrator.calls(), 3);
    for page in story.pages() {
        assert!(page.image().is_some());
    }
}

#[tokio::test]
async fn page_without_illustration_clause_skips_the_image_call() {
    let script = "1. 페이지 (삽화: 첫 장면)\n첫 이야기.\n\n2. 페이지\n그림 없는 이야기.\n";
    let teller = ScriptedTeller::new(script);
    let illustrator = ScriptedIllustrator::new();

    let story = generate_story("topic", &teller, &illustrator)
        .await
        .expect("story");

    assert_eq!(story.pages().len(), 2);
    assert_eq!(illustrator.calls(), 1);
    assert!(story.pages()[0].image().is_some());
    assert!(story.pages()[1].illustration().is_none());
    assert!(story.pages()[1].image().is_none());
}

#[tokio::test]
async fn one_failing_illustration_leaves_other_pages_intact() {
    let teller = ScriptedTeller::new(three_page_script());
    let illustrator = ScriptedIllustrator::new().failing_on(2);

    let story = generate_story("topic", &teller, &illustrator)
        .await
        .expect("story despite one failed illustration");

    assert_eq!(story.pages().len(), 3);
    assert_eq!(illustrator.calls(), 3);
    assert!(story.pages()[0].image().is_some());
    assert!(story.pages()[1].image().is_none());
    assert!(story.pages()[2].image().is_some());
}

#[tokio::test]
async fn empty_upstream_image_response_degrades_to_no_image() {
    let teller = ScriptedTeller::new(three_page_script());
    let illustrator = ScriptedIllustrator::new().empty_on(1);

    let story = generate_story("topic", &teller, &illustrator)
        .await
        .expect("story");

    assert!(story.pages()[0].image().is_none());
    assert!(story.pages()[1].image().is_some());
}

#[tokio::test]
async fn text_without_markers_fails_with_no_pages() {
    // Whitespace-only model output parses to zero records.
    let teller = ScriptedTeller::new("\n   \n");
    let illustrator = ScriptedIllustrator::new();

    let err = generate_story("topic", &teller, &illustrator)
        .await
        .expect_err("parse failure");

    assert!(matches!(
        err.kind(),
        DonghwaErrorKind::Story(e) if e.kind == StoryErrorKind::NoPages
    ));
    assert_eq!(illustrator.calls(), 0);
}

#[tokio::test]
async fn empty_text_response_is_fatal() {
    let illustrator = ScriptedIllustrator::new();

    let err = generate_story("topic", &EmptyTeller, &illustrator)
        .await
        .expect_err("upstream failure");

    assert!(matches!(
        err.kind(),
        DonghwaErrorKind::Gemini(e) if e.kind == GeminiErrorKind::EmptyResponse
    ));
    assert_eq!(illustrator.calls(), 0);
}
