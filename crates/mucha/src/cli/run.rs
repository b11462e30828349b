//! Command handlers.

use crate::cli::ProfilesCommand;
use base64::Engine;
use mucha_caption::{CaptionGenerator, CaptionRequest, Platform};
use mucha_models::GeminiClient;
use mucha_post::{MediaAttachment, Profile, ProfileStore};
use mucha_preview::render_preview;
use mucha_server::{ApiState, ServerConfig, serve};
use mucha_storage::FileStore;
use std::path::PathBuf;
use tracing::info;

/// Run the caption generation service until shutdown.
pub async fn run_serve(
    bind: Option<String>,
    model: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ServerConfig::from_env();
    if let Some(bind) = bind {
        config.bind_addr = bind;
    }
    if let Some(model) = model {
        config = config.with_model(model);
    }

    info!(bind = %config.bind_addr, model = %config.model, "Starting caption service");

    let driver = GeminiClient::with_default_model(&config.model)?;
    let state = ApiState::new(CaptionGenerator::new(driver));
    serve(&config.bind_addr, state).await?;

    Ok(())
}

/// Generate a one-shot caption suggestion and print it as JSON.
pub async fn run_generate(
    platform: &str,
    text: String,
    image: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let platform: Platform = platform.parse()?;

    let mut request = CaptionRequest::text(platform, text);
    if let Some(path) = image {
        let bytes = std::fs::read(&path)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        request = request.with_image_data(encoded);
    }

    let generator = CaptionGenerator::new(GeminiClient::new()?);
    let suggestion = generator.generate(&request).await?;

    println!("{}", serde_json::to_string_pretty(&suggestion)?);
    Ok(())
}

/// Open the profile store in the user's data directory.
///
/// `MUCHA_DATA_DIR` overrides the location, which the tests rely on.
fn open_profile_store() -> Result<ProfileStore<FileStore>, Box<dyn std::error::Error>> {
    let base = match std::env::var("MUCHA_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mucha"),
    };

    Ok(ProfileStore::new(FileStore::new(base)?))
}

/// Handle profile management commands.
pub async fn handle_profiles_command(
    command: ProfilesCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_profile_store()?;

    match command {
        ProfilesCommand::List => {
            let profiles = store.load().await?;
            for profile in &profiles {
                println!(
                    "{}  [{}]  @{}  {}",
                    profile.display_name,
                    profile.color_tag,
                    profile.instagram_handle,
                    profile.facebook_url
                );
            }
            println!("{} profiles", profiles.len());
        }

        ProfilesCommand::Add {
            name,
            avatar,
            facebook,
            instagram,
            color,
        } => {
            // Re-adding a known display name edits it in place, matching
            // the settings form's update behavior.
            let existing = store
                .load()
                .await?
                .into_iter()
                .find(|p| p.display_name == name);

            let mut profile = existing.unwrap_or_else(|| Profile::new(&name));
            profile.avatar_url = avatar;
            profile.facebook_url = facebook;
            profile.instagram_handle = instagram;
            profile.color_tag = color;

            let profiles = store.upsert(profile).await?;
            println!("Saved. {} profiles", profiles.len());
        }
    }

    Ok(())
}

/// Render a post preview to the terminal.
pub async fn run_preview(
    platform: &str,
    text: String,
    profile_name: Option<String>,
    video: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let platform: Platform = platform.parse()?;

    let profiles = open_profile_store()?.load().await?;
    let profile = match &profile_name {
        Some(name) => profiles
            .iter()
            .find(|p| &p.display_name == name)
            .ok_or_else(|| format!("No profile named {}", name))?,
        None => profiles
            .first()
            .ok_or("No profiles available")?,
    };

    let media = video.map(MediaAttachment::video);
    let preview = render_preview(platform, profile, &text, media.as_ref(), &[]);

    println!("{}", preview.to_text());
    Ok(())
}
