//! Caption request contract.

use crate::Platform;
use mucha_error::{CaptionError, CaptionErrorKind};
use serde::{Deserialize, Serialize};

/// A request to generate a caption suggestion.
///
/// Invariant: at least one of `text` or `image_data` must be non-empty.
/// Requests violating the invariant are rejected before any model call.
///
/// # Examples
///
/// ```
/// use mucha_caption::{CaptionRequest, Platform};
///
/// let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");
/// assert!(request.validate().is_ok());
///
/// let empty = CaptionRequest::text(Platform::Facebook, "");
/// assert!(empty.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRequest {
    /// Target platform
    pub platform: Platform,
    /// User draft text (may be empty when an image is attached)
    #[serde(default)]
    pub text: String,
    /// Base64-encoded payload of at most one attached image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

impl CaptionRequest {
    /// Create a text-only request.
    pub fn text(platform: Platform, text: impl Into<String>) -> Self {
        Self {
            platform,
            text: text.into(),
            image_data: None,
        }
    }

    /// Attach a base64-encoded image payload.
    pub fn with_image_data(mut self, image_data: impl Into<String>) -> Self {
        self.image_data = Some(image_data.into());
        self
    }

    /// Whether the request carries any usable content.
    ///
    /// Whitespace-only text and empty image payloads count as absent.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
            || self
                .image_data
                .as_deref()
                .is_some_and(|data| !data.is_empty())
    }

    /// Reject the request when both text and image are missing.
    pub fn validate(&self) -> Result<(), CaptionError> {
        if self.has_content() {
            Ok(())
        } else {
            Err(CaptionError::new(CaptionErrorKind::MissingContent))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_only_is_valid() {
        let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn image_only_is_valid() {
        let request = CaptionRequest::text(Platform::Facebook, "").with_image_data("aGVsbG8=");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn whitespace_text_without_image_is_rejected() {
        let request = CaptionRequest::text(Platform::Facebook, "   \n\t");
        let err = request.validate().unwrap_err();
        assert_eq!(err.kind, CaptionErrorKind::MissingContent);
    }

    #[test]
    fn empty_image_payload_counts_as_absent() {
        let request = CaptionRequest::text(Platform::Instagram, "").with_image_data("");
        assert!(request.validate().is_err());
    }

    #[test]
    fn wire_form_uses_camel_case() {
        let request =
            CaptionRequest::text(Platform::Instagram, "ahoj").with_image_data("aGVsbG8=");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"imageData\""));
        assert!(json.contains("\"instagram\""));
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let request: CaptionRequest =
            serde_json::from_str(r#"{"platform": "facebook"}"#).unwrap();
        assert_eq!(request.platform, Platform::Facebook);
        assert!(request.text.is_empty());
        assert!(request.image_data.is_none());
    }
}
