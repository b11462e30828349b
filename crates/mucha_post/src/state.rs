//! Explicit, serializable studio state.

use crate::MediaAttachment;
use mucha_caption::{CaptionRequest, CaptionSuggestion, Platform};
use mucha_error::{BackendError, MuchaResult};
use serde::{Deserialize, Serialize};

/// The whole form state of one drafting session.
///
/// Rather than ambient mutable variables, the UI layer threads this one
/// serializable object through every interaction, which makes the
/// generation round trip deterministic to test independent of rendering.
///
/// # Examples
///
/// ```
/// use mucha_caption::Platform;
/// use mucha_post::StudioState;
///
/// let mut state = StudioState::new(Platform::Instagram);
/// state.draft_text = "Akce na tisk vizitek".to_string();
/// let request = state.begin_generation().unwrap();
/// assert_eq!(request.platform, Platform::Instagram);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioState {
    /// Target platform for the draft
    pub platform: Platform,
    /// User-entered draft text
    #[serde(default)]
    pub draft_text: String,
    /// Attached media, at most one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaAttachment>,
    /// The most recent AI suggestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<CaptionSuggestion>,
    /// Id of the profile the user posts as
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_profile_id: Option<String>,
    /// Whether a generation call is currently suspended awaiting the model.
    /// While set, the triggering control is disabled; no queuing and no
    /// cancellation exist.
    #[serde(default)]
    pub generating: bool,
}

impl StudioState {
    /// Fresh state for a platform.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            draft_text: String::new(),
            media: None,
            suggestion: None,
            active_profile_id: None,
            generating: false,
        }
    }

    /// Attach media, replacing any previous attachment.
    pub fn attach_media(&mut self, media: MediaAttachment) {
        self.media = Some(media);
    }

    /// Remove the attached media.
    pub fn remove_media(&mut self) {
        self.media = None;
    }

    /// Start a generation round trip.
    ///
    /// Validates that the draft has content, marks the state as generating,
    /// and returns the request to send. Fails when a generation is already
    /// in flight, which is how the UI's disabled submit button is modeled.
    pub fn begin_generation(&mut self) -> MuchaResult<CaptionRequest> {
        if self.generating {
            return Err(BackendError::new("generation already in flight").into());
        }

        let request = CaptionRequest {
            platform: self.platform,
            text: self.draft_text.clone(),
            image_data: self
                .media
                .as_ref()
                .and_then(|m| m.encoded_payload.clone()),
        };
        request.validate()?;

        self.generating = true;
        Ok(request)
    }

    /// Record a finished generation, overwriting the previous suggestion.
    pub fn finish_generation(&mut self, suggestion: CaptionSuggestion) {
        self.suggestion = Some(suggestion);
        self.generating = false;
    }

    /// Record a failed generation, re-enabling the trigger.
    pub fn fail_generation(&mut self) {
        self.generating = false;
    }

    /// Replace the draft text with the suggestion's caption and hashtags.
    ///
    /// No-op when there is no suggestion.
    pub fn apply_suggestion(&mut self) {
        if let Some(suggestion) = &self.suggestion {
            self.draft_text = format!("{}\n\n{}", suggestion.caption, suggestion.hashtag_line());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediaAttachment;

    fn suggestion() -> CaptionSuggestion {
        CaptionSuggestion {
            caption: "Nové vizitky! ✨".to_string(),
            hashtags: vec![
                "#tisk".to_string(),
                "#vizitky".to_string(),
                "#akce".to_string(),
                "#branding".to_string(),
                "#design".to_string(),
            ],
            engagement_tip: "Přidejte otázku.".to_string(),
        }
    }

    #[test]
    fn begin_generation_requires_content() {
        let mut state = StudioState::new(Platform::Instagram);
        assert!(state.begin_generation().is_err());
        assert!(!state.generating);
    }

    #[test]
    fn begin_generation_is_refused_while_in_flight() {
        let mut state = StudioState::new(Platform::Instagram);
        state.draft_text = "Akce na tisk vizitek".to_string();

        let first = state.begin_generation();
        assert!(first.is_ok());

        // The control is disabled while suspended
        assert!(state.begin_generation().is_err());

        state.fail_generation();
        assert!(state.begin_generation().is_ok());
    }

    #[test]
    fn media_payload_flows_into_the_request() {
        let mut state = StudioState::new(Platform::Facebook);
        state.attach_media(MediaAttachment::image("blob:abc", "aGVsbG8=").unwrap());

        let request = state.begin_generation().unwrap();
        assert_eq!(request.image_data.as_deref(), Some("aGVsbG8="));
        assert!(request.text.is_empty());
    }

    #[test]
    fn attach_replaces_previous_media() {
        let mut state = StudioState::new(Platform::Instagram);
        state.attach_media(MediaAttachment::video("blob:one"));
        state.attach_media(MediaAttachment::video("blob:two"));

        assert_eq!(state.media.as_ref().unwrap().local_url, "blob:two");

        state.remove_media();
        assert!(state.media.is_none());
    }

    #[test]
    fn finish_overwrites_the_previous_suggestion() {
        let mut state = StudioState::new(Platform::Instagram);
        state.draft_text = "Akce".to_string();

        let _ = state.begin_generation().unwrap();
        state.finish_generation(suggestion());

        let mut second = suggestion();
        second.caption = "Jiný popisek".to_string();
        let _ = state.begin_generation().unwrap();
        state.finish_generation(second.clone());

        assert_eq!(state.suggestion, Some(second));
        assert!(!state.generating);
    }

    #[test]
    fn apply_suggestion_rewrites_the_draft() {
        let mut state = StudioState::new(Platform::Instagram);
        state.suggestion = Some(suggestion());
        state.apply_suggestion();

        assert!(state.draft_text.starts_with("Nové vizitky! ✨"));
        assert!(state.draft_text.ends_with("#tisk #vizitky #akce #branding #design"));
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = StudioState::new(Platform::Facebook);
        state.draft_text = "Ahoj".to_string();
        state.suggestion = Some(suggestion());

        let json = serde_json::to_string(&state).unwrap();
        let decoded: StudioState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, state);
    }
}
