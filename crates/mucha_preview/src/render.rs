//! Preview layout construction.

use mucha_caption::Platform;
use mucha_post::{CropPosition, MediaAttachment, MediaKind, Profile};
use serde::{Deserialize, Serialize};

/// Placeholder body shown when the draft is completely empty.
const EMPTY_PLACEHOLDER: &str = "Začněte psát svůj příspěvek...";

/// Header block of a preview: who the post appears to come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewHeader {
    /// Display title: `@handle` on Instagram, the display name on Facebook
    pub title: String,
    /// Avatar image URL
    pub avatar_url: String,
}

/// Media block of a preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFrame {
    /// Image or video
    pub kind: MediaKind,
    /// Locally-addressable URL to display from
    pub source_url: String,
    /// Crop framing offsets carried over from the attachment
    pub position: CropPosition,
}

/// One ordered block of the rendered layout.
///
/// The section order is the layout: Instagram previews put media before the
/// body, Facebook previews put the body first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "data", rename_all = "camelCase")]
pub enum PreviewSection {
    /// Poster identity
    Header(PreviewHeader),
    /// Attached media
    Media(MediaFrame),
    /// Caption or draft text (placeholder when the draft is empty)
    Body(String),
    /// Hashtag row
    Hashtags(Vec<String>),
}

/// A read-only visual approximation of the post on its target platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPreview {
    /// The platform whose layout this mimics
    pub platform: Platform,
    /// Ordered layout blocks
    pub sections: Vec<PreviewSection>,
    /// Whether the body shows the empty-draft placeholder
    pub placeholder: bool,
}

impl PostPreview {
    /// Plain-text rendering for terminal display.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        for section in &self.sections {
            match section {
                PreviewSection::Header(header) => lines.push(header.title.clone()),
                PreviewSection::Media(frame) => {
                    lines.push(format!("[{}: {}]", frame.kind, frame.source_url))
                }
                PreviewSection::Body(body) => lines.push(body.clone()),
                PreviewSection::Hashtags(tags) => lines.push(tags.join(" ")),
            }
        }
        lines.join("\n")
    }
}

/// Render a preview of the draft for a platform.
///
/// Pure presentation: tolerates all-empty input (placeholder body) and
/// media of either kind. The text is carried into the body unmodified, so
/// anything the generation endpoint returns renders as-is.
///
/// # Examples
///
/// ```
/// use mucha_caption::Platform;
/// use mucha_post::Profile;
/// use mucha_preview::render_preview;
///
/// let profile = Profile::new("Tiskárna U Lva").with_instagram_handle("tiskarna_u_lva");
/// let preview = render_preview(Platform::Instagram, &profile, "Akce!", None, &[]);
/// assert!(!preview.placeholder);
/// assert!(preview.to_text().contains("@tiskarna_u_lva"));
/// ```
pub fn render_preview(
    platform: Platform,
    profile: &Profile,
    text: &str,
    media: Option<&MediaAttachment>,
    hashtags: &[String],
) -> PostPreview {
    let placeholder = text.trim().is_empty() && media.is_none() && hashtags.is_empty();

    let header = PreviewHeader {
        title: match platform {
            Platform::Instagram => format!("@{}", profile.instagram_handle),
            Platform::Facebook => profile.display_name.clone(),
        },
        avatar_url: profile.avatar_url.clone(),
    };

    let media_frame = media.map(|attachment| MediaFrame {
        kind: attachment.kind,
        source_url: attachment.local_url.clone(),
        position: attachment.position,
    });

    let body = if placeholder {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        text.to_string()
    };

    let mut sections = vec![PreviewSection::Header(header)];
    match platform {
        // Instagram: square media first, caption below
        Platform::Instagram => {
            if let Some(frame) = media_frame {
                sections.push(PreviewSection::Media(frame));
            }
            sections.push(PreviewSection::Body(body));
        }
        // Facebook: text above, media below
        Platform::Facebook => {
            sections.push(PreviewSection::Body(body));
            if let Some(frame) = media_frame {
                sections.push(PreviewSection::Media(frame));
            }
        }
    }
    if !hashtags.is_empty() {
        sections.push(PreviewSection::Hashtags(hashtags.to_vec()));
    }

    PostPreview {
        platform,
        sections,
        placeholder,
    }
}
