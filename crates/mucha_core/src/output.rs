//! Output types from generation responses.

use serde::{Deserialize, Serialize};

/// Supported output types from the generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Structured JSON output.
    Json(serde_json::Value),
}

impl Output {
    /// The text content, when this output is text.
    ///
    /// # Examples
    ///
    /// ```
    /// use mucha_core::Output;
    ///
    /// let out = Output::Text("hotovo".to_string());
    /// assert_eq!(out.as_text(), Some("hotovo"));
    /// ```
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            _ => None,
        }
    }
}
