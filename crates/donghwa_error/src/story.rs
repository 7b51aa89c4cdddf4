//! Story pipeline error types.

/// Failure modes of the story generation pipeline itself, as opposed to
/// upstream Gemini failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryErrorKind {
    /// Topic was empty or whitespace-only
    EmptyTopic,
    /// No page blocks could be parsed from the model output
    NoPages,
}

impl std::fmt::Display for StoryErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoryErrorKind::EmptyTopic => write!(f, "Story topic is empty"),
            StoryErrorKind::NoPages => {
                write!(f, "No story pages could be parsed from the model output")
            }
        }
    }
}

/// Story error with source location tracking.
///
/// # Examples
///
/// ```
/// use donghwa_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::EmptyTopic);
/// assert!(format!("{}", err).contains("topic is empty"));
/// ```
#[derive(Debug, Clone)]
pub struct StoryError {
    /// The kind of error that occurred
    pub kind: StoryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for StoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Story Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for StoryError {}
