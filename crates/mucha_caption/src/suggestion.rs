//! Caption suggestion contract.

use mucha_error::{CaptionError, CaptionErrorKind};
use serde::{Deserialize, Serialize};

/// Bounds on the hashtag list, fixed by the prompt template.
const MIN_HASHTAGS: usize = 5;
const MAX_HASHTAGS: usize = 10;

/// A structured caption suggestion produced by the model.
///
/// The service only validates that the shape matches the declared schema;
/// wording is model-generated and non-deterministic.
///
/// # Examples
///
/// ```
/// use mucha_caption::CaptionSuggestion;
///
/// let json = r##"{
///     "caption": "Nové vizitky za akční ceny! 🎉",
///     "hashtags": ["#tisk", "#vizitky", "#akce", "#design", "#praha"],
///     "engagementTip": "Přidejte do popisku otázku pro sledující."
/// }"##;
/// let suggestion: CaptionSuggestion = serde_json::from_str(json).unwrap();
/// assert!(suggestion.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSuggestion {
    /// The generated caption, optimized for the target platform
    pub caption: String,
    /// 5-10 topical hashtags, each prefixed with '#'
    pub hashtags: Vec<String>,
    /// Exactly one short tip for increasing engagement and reach
    pub engagement_tip: String,
}

impl CaptionSuggestion {
    /// Validate the suggestion against the declared output shape.
    ///
    /// Checks a non-empty caption, 5-10 hashtags each starting with '#',
    /// and a non-empty engagement tip. Violations fail the generation
    /// request; the service never rewrites model output.
    pub fn validate(&self) -> Result<(), CaptionError> {
        if self.caption.trim().is_empty() {
            return Err(CaptionError::new(CaptionErrorKind::EmptyCaption));
        }

        if self.hashtags.len() < MIN_HASHTAGS || self.hashtags.len() > MAX_HASHTAGS {
            return Err(CaptionError::new(CaptionErrorKind::HashtagCount(
                self.hashtags.len(),
            )));
        }

        for hashtag in &self.hashtags {
            if !hashtag.starts_with('#') || hashtag.len() == 1 {
                return Err(CaptionError::new(CaptionErrorKind::HashtagFormat(
                    hashtag.clone(),
                )));
            }
        }

        if self.engagement_tip.trim().is_empty() {
            return Err(CaptionError::new(CaptionErrorKind::EmptyEngagementTip));
        }

        Ok(())
    }

    /// The hashtags joined into a single display line.
    pub fn hashtag_line(&self) -> String {
        self.hashtags.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conforming() -> CaptionSuggestion {
        CaptionSuggestion {
            caption: "Nové vizitky za akční ceny! 🎉".to_string(),
            hashtags: vec![
                "#tisk".to_string(),
                "#vizitky".to_string(),
                "#akce".to_string(),
                "#design".to_string(),
                "#praha".to_string(),
            ],
            engagement_tip: "Přidejte do popisku otázku pro sledující.".to_string(),
        }
    }

    #[test]
    fn conforming_suggestion_passes() {
        assert!(conforming().validate().is_ok());
    }

    #[test]
    fn empty_caption_fails() {
        let mut suggestion = conforming();
        suggestion.caption = "  ".to_string();
        let err = suggestion.validate().unwrap_err();
        assert_eq!(err.kind, CaptionErrorKind::EmptyCaption);
    }

    #[test]
    fn too_few_hashtags_fail() {
        let mut suggestion = conforming();
        suggestion.hashtags.truncate(3);
        let err = suggestion.validate().unwrap_err();
        assert_eq!(err.kind, CaptionErrorKind::HashtagCount(3));
    }

    #[test]
    fn too_many_hashtags_fail() {
        let mut suggestion = conforming();
        for i in 0..6 {
            suggestion.hashtags.push(format!("#navic{}", i));
        }
        let err = suggestion.validate().unwrap_err();
        assert_eq!(err.kind, CaptionErrorKind::HashtagCount(11));
    }

    #[test]
    fn unprefixed_hashtag_fails() {
        let mut suggestion = conforming();
        suggestion.hashtags[2] = "akce".to_string();
        let err = suggestion.validate().unwrap_err();
        assert_eq!(
            err.kind,
            CaptionErrorKind::HashtagFormat("akce".to_string())
        );
    }

    #[test]
    fn bare_hash_fails() {
        let mut suggestion = conforming();
        suggestion.hashtags[0] = "#".to_string();
        assert!(suggestion.validate().is_err());
    }

    #[test]
    fn empty_tip_fails() {
        let mut suggestion = conforming();
        suggestion.engagement_tip = String::new();
        let err = suggestion.validate().unwrap_err();
        assert_eq!(err.kind, CaptionErrorKind::EmptyEngagementTip);
    }

    #[test]
    fn wire_form_uses_camel_case() {
        let json = serde_json::to_string(&conforming()).unwrap();
        assert!(json.contains("\"engagementTip\""));
    }

    #[test]
    fn hashtag_line_joins_with_spaces() {
        assert_eq!(
            conforming().hashtag_line(),
            "#tisk #vizitky #akce #design #praha"
        );
    }
}
