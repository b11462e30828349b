//! Saved posting identities.

use mucha_error::MuchaResult;
use mucha_storage::KeyValueStore;
use serde::{Deserialize, Serialize};

/// Fixed storage key for the profile list, mirroring the browser
/// local-storage key it replaces.
pub const PROFILE_KEY: &str = "mucha.profiles";

/// A saved identity the user posts as.
///
/// # Examples
///
/// ```
/// use mucha_post::Profile;
///
/// let profile = Profile::new("Tiskárna U Lva")
///     .with_instagram_handle("tiskarna_u_lva")
///     .with_facebook_url("https://www.facebook.com/tiskarnaulva");
/// assert_eq!(profile.display_name, "Tiskárna U Lva");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Stable identifier, unique within the list
    pub id: String,
    /// Name shown in previews and the profile picker
    pub display_name: String,
    /// Avatar image URL
    pub avatar_url: String,
    /// Outbound Facebook page link
    pub facebook_url: String,
    /// Instagram handle without the '@'
    pub instagram_handle: String,
    /// Accent color used to tag the profile in the picker
    pub color_tag: String,
}

impl Profile {
    /// Create a profile with a fresh id and empty links.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            display_name: display_name.into(),
            avatar_url: String::new(),
            facebook_url: String::new(),
            instagram_handle: String::new(),
            color_tag: "#6b7280".to_string(),
        }
    }

    /// Set the avatar URL.
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = url.into();
        self
    }

    /// Set the Facebook page link.
    pub fn with_facebook_url(mut self, url: impl Into<String>) -> Self {
        self.facebook_url = url.into();
        self
    }

    /// Set the Instagram handle.
    pub fn with_instagram_handle(mut self, handle: impl Into<String>) -> Self {
        self.instagram_handle = handle.into();
        self
    }

    /// Set the accent color tag.
    pub fn with_color_tag(mut self, color: impl Into<String>) -> Self {
        self.color_tag = color.into();
        self
    }
}

/// The hardcoded list a fresh installation starts from.
///
/// Loaded whenever no saved copy exists or the saved copy is unreadable.
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "seed-tiskarna".to_string(),
            display_name: "Tiskárna U Lva".to_string(),
            avatar_url: "https://i.pravatar.cc/150?u=tiskarna".to_string(),
            facebook_url: "https://www.facebook.com/tiskarnaulva".to_string(),
            instagram_handle: "tiskarna_u_lva".to_string(),
            color_tag: "#2563eb".to_string(),
        },
        Profile {
            id: "seed-kavarna".to_string(),
            display_name: "Kavárna Slunce".to_string(),
            avatar_url: "https://i.pravatar.cc/150?u=kavarna".to_string(),
            facebook_url: "https://www.facebook.com/kavarnaslunce".to_string(),
            instagram_handle: "kavarna.slunce".to_string(),
            color_tag: "#d97706".to_string(),
        },
    ]
}

/// Profile list persistence over any [`KeyValueStore`] backend.
///
/// The list is stored JSON-encoded under [`PROFILE_KEY`]. Insertion order
/// is preserved; profiles are created and updated through the settings form
/// but never deleted by application logic.
pub struct ProfileStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    /// Wrap a storage backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the profile list.
    ///
    /// Falls back to [`seed_profiles`] when nothing has been saved yet or
    /// when the saved copy cannot be decoded. The fallback is silent toward
    /// the caller but logged, so a corrupted store is observable.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> MuchaResult<Vec<Profile>> {
        let Some(raw) = self.store.get(PROFILE_KEY).await? else {
            tracing::debug!("No saved profiles, using seed list");
            return Ok(seed_profiles());
        };

        match serde_json::from_str(&raw) {
            Ok(profiles) => Ok(profiles),
            Err(e) => {
                tracing::warn!(error = %e, "Saved profiles unreadable, using seed list");
                Ok(seed_profiles())
            }
        }
    }

    /// Insert or update a profile, preserving list order.
    ///
    /// An existing profile with the same id is replaced in place; a new
    /// profile is appended. Returns the updated list.
    #[tracing::instrument(skip(self, profile), fields(id = %profile.id))]
    pub async fn upsert(&self, profile: Profile) -> MuchaResult<Vec<Profile>> {
        let mut profiles = self.load().await?;

        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => profiles.push(profile),
        }

        self.persist(&profiles).await?;
        Ok(profiles)
    }

    /// Write the full list back to the backend.
    async fn persist(&self, profiles: &[Profile]) -> MuchaResult<()> {
        let raw = serde_json::to_string(profiles).map_err(|e| {
            mucha_error::StorageError::new(mucha_error::StorageErrorKind::ValueEncode(
                e.to_string(),
            ))
        })?;
        self.store.put(PROFILE_KEY, &raw).await
    }
}
