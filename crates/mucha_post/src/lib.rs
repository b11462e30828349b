//! Post drafting domain for the Mucha social post studio.
//!
//! Everything between the form and the wire lives here: the saved
//! [`Profile`] identities a user posts as, attached [`MediaAttachment`]
//! media with crop framing, the serializable [`StudioState`] that the UI
//! layer threads through every interaction, and the share handoff helpers
//! that produce clipboard text and outbound platform links.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod profile;
mod share;
mod state;

pub use media::{CropPosition, MediaAttachment, MediaKind};
pub use profile::{PROFILE_KEY, Profile, ProfileStore, seed_profiles};
pub use share::{compose_share_text, share_target_url};
pub use state::StudioState;
