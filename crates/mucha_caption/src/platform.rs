//! Target platform selection.

use serde::{Deserialize, Serialize};

/// The social platform a post targets.
///
/// The platform selects the prompt wording, which preview layout renders
/// the draft, and which outbound profile link the share handoff uses.
/// Immutable per request.
///
/// On the wire the lowercase form is canonical; the capitalized display
/// form is what gets interpolated into the prompt template and previews.
///
/// # Examples
///
/// ```
/// use mucha_caption::Platform;
///
/// assert_eq!(format!("{}", Platform::Instagram), "Instagram");
/// assert_eq!(serde_json::to_string(&Platform::Facebook).unwrap(), "\"facebook\"");
/// assert_eq!("Instagram".parse::<Platform>().unwrap(), Platform::Instagram);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Instagram: media-first layout, handle-prefixed caption
    #[serde(alias = "Instagram")]
    Instagram,
    /// Facebook: text-first layout, display-name header
    #[serde(alias = "Facebook")]
    Facebook,
}

impl Platform {
    /// The canonical lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "facebook" => Ok(Platform::Facebook),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_is_lowercase() {
        let json = serde_json::to_string(&Platform::Instagram).unwrap();
        assert_eq!(json, "\"instagram\"");
    }

    #[test]
    fn accepts_capitalized_wire_form() {
        let platform: Platform = serde_json::from_str("\"Facebook\"").unwrap();
        assert_eq!(platform, Platform::Facebook);
    }

    #[test]
    fn rejects_unknown_platform() {
        assert!("twitter".parse::<Platform>().is_err());
    }
}
