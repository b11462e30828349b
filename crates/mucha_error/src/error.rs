//! Top-level error wrapper types.

use crate::{
    BackendError, CaptionError, ConfigError, GeminiError, HttpError, JsonError, ServerError,
    StorageError,
};

/// The foundation error enum for the Mucha workspace.
///
/// # Examples
///
/// ```
/// use mucha_error::{MuchaError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: MuchaError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MuchaErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Generic backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Caption generation error
    #[from(CaptionError)]
    Caption(CaptionError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Caption service boundary error
    #[from(ServerError)]
    Server(ServerError),
}

/// Mucha error with kind discrimination.
///
/// # Examples
///
/// ```
/// use mucha_error::{MuchaResult, ConfigError};
///
/// fn might_fail() -> MuchaResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Mucha Error: {}", _0)]
pub struct MuchaError(Box<MuchaErrorKind>);

impl MuchaError {
    /// Create a new error from a kind.
    pub fn new(kind: MuchaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MuchaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MuchaErrorKind
impl<T> From<T> for MuchaError
where
    T: Into<MuchaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Mucha operations.
///
/// # Examples
///
/// ```
/// use mucha_error::{MuchaResult, HttpError};
///
/// fn fetch_suggestion() -> MuchaResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type MuchaResult<T> = std::result::Result<T, MuchaError>;
