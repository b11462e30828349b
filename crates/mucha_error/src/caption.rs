//! Caption generation error types.

/// Kinds of caption generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CaptionErrorKind {
    /// Neither draft text nor an attached image was provided
    #[display("Request has neither text nor image data")]
    MissingContent,
    /// The model response contained no JSON object
    #[display("No JSON object found in model response ({} chars)", _0)]
    NoJson(usize),
    /// The extracted JSON did not match the suggestion shape
    #[display("Malformed suggestion: {}", _0)]
    MalformedSuggestion(String),
    /// The generated caption was empty
    #[display("Generated caption is empty")]
    EmptyCaption,
    /// The hashtag count fell outside the 5-10 range
    #[display("Expected 5-10 hashtags, got {}", _0)]
    HashtagCount(usize),
    /// A hashtag was not prefixed with '#'
    #[display("Hashtag missing '#' prefix: {}", _0)]
    HashtagFormat(String),
    /// The engagement tip was empty
    #[display("Generated engagement tip is empty")]
    EmptyEngagementTip,
}

/// Caption error with source location tracking.
///
/// # Examples
///
/// ```
/// use mucha_error::{CaptionError, CaptionErrorKind};
///
/// let err = CaptionError::new(CaptionErrorKind::HashtagCount(3));
/// assert!(format!("{}", err).contains("got 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Caption Error: {} at line {} in {}", kind, line, file)]
pub struct CaptionError {
    /// The kind of error that occurred
    pub kind: CaptionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CaptionError {
    /// Create a new CaptionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CaptionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this error should be reported as invalid input rather than
    /// a generation failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind, CaptionErrorKind::MissingContent)
    }
}
