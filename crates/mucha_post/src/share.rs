//! Share handoff helpers.
//!
//! The browser side of the handoff (clipboard write, opening the platform
//! in a new tab) is best-effort and out of scope; these helpers produce the
//! text and the link it uses.

use crate::{Profile, StudioState};
use mucha_caption::Platform;

/// The finished text handed to the clipboard.
///
/// Prefers the latest suggestion (caption plus hashtag line); falls back to
/// the raw draft when nothing was generated.
///
/// # Examples
///
/// ```
/// use mucha_caption::Platform;
/// use mucha_post::{compose_share_text, StudioState};
///
/// let mut state = StudioState::new(Platform::Instagram);
/// state.draft_text = "Akce na tisk vizitek".to_string();
/// assert_eq!(compose_share_text(&state), "Akce na tisk vizitek");
/// ```
pub fn compose_share_text(state: &StudioState) -> String {
    match &state.suggestion {
        Some(suggestion) => format!("{}\n\n{}", suggestion.caption, suggestion.hashtag_line()),
        None => state.draft_text.clone(),
    }
}

/// The outbound platform link opened after the copy.
///
/// Instagram links to the profile's handle; Facebook uses the profile's
/// saved page URL.
pub fn share_target_url(platform: Platform, profile: &Profile) -> String {
    match platform {
        Platform::Instagram => {
            format!("https://www.instagram.com/{}/", profile.instagram_handle)
        }
        Platform::Facebook => profile.facebook_url.clone(),
    }
}
