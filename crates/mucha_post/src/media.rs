//! Attached media and crop framing.

use base64::Engine;
use mucha_error::{BackendError, MuchaResult};
use serde::{Deserialize, Serialize};

/// The kind of media attached to a draft.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image (carries an inline-encoded copy for transmission)
    #[display("image")]
    Image,
    /// Video clip (preview-only, never transmitted)
    #[display("video")]
    Video,
}

/// Percentage offsets for crop framing, applied when the preview crops the
/// media to the platform's aspect ratio.
///
/// Both axes are clamped to 0-100; `50/50` keeps the media centered.
///
/// # Examples
///
/// ```
/// use mucha_post::CropPosition;
///
/// let position = CropPosition::new(130.0, -5.0);
/// assert_eq!(position.x, 100.0);
/// assert_eq!(position.y, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropPosition {
    /// Horizontal offset in percent (0 = left edge, 100 = right edge)
    pub x: f32,
    /// Vertical offset in percent (0 = top edge, 100 = bottom edge)
    pub y: f32,
}

impl CropPosition {
    /// Create a position, clamping both axes into 0-100.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
        }
    }

    /// Centered framing.
    pub fn centered() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl Default for CropPosition {
    fn default() -> Self {
        Self::centered()
    }
}

/// Media attached to a post draft.
///
/// Created when a file is chosen, replaced or removed explicitly, and never
/// persisted across sessions. Only images carry an inline-encoded payload;
/// video is previewed from its local URL only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttachment {
    /// Locally-addressable URL of the chosen file
    pub local_url: String,
    /// Image or video
    pub kind: MediaKind,
    /// Base64-encoded copy for transmission (image only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_payload: Option<String>,
    /// Crop framing offsets
    #[serde(default)]
    pub position: CropPosition,
}

impl MediaAttachment {
    /// Attach an image with its inline-encoded payload.
    ///
    /// # Errors
    ///
    /// Fails when the payload is not valid base64.
    pub fn image(local_url: impl Into<String>, encoded_payload: impl Into<String>) -> MuchaResult<Self> {
        let encoded_payload = encoded_payload.into();

        base64::engine::general_purpose::STANDARD
            .decode(&encoded_payload)
            .map_err(|e| BackendError::new(format!("invalid base64 image payload: {}", e)))?;

        Ok(Self {
            local_url: local_url.into(),
            kind: MediaKind::Image,
            encoded_payload: Some(encoded_payload),
            position: CropPosition::centered(),
        })
    }

    /// Attach a video from its local URL.
    pub fn video(local_url: impl Into<String>) -> Self {
        Self {
            local_url: local_url.into(),
            kind: MediaKind::Video,
            encoded_payload: None,
            position: CropPosition::centered(),
        }
    }

    /// Reframe the crop, clamping offsets into range.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = CropPosition::new(x, y);
    }
}
