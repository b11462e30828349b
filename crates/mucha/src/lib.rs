//! Mucha: an AI-assisted social post studio.
//!
//! Draft a post, generate a caption with hashtags and an engagement tip
//! through Gemini, preview it the way Instagram or Facebook would render
//! it, and hand the finished text off for sharing.
//!
//! This facade crate re-exports the public surface of the workspace:
//!
//! - [`CaptionGenerator`], [`CaptionRequest`], [`CaptionSuggestion`] -- the
//!   generation round trip
//! - [`GeminiClient`] -- the model driver
//! - [`StudioState`], [`Profile`], [`MediaAttachment`] -- the drafting domain
//! - [`render_preview`] -- read-only platform previews
//! - [`ApiState`], [`create_router`], [`CaptionApiClient`] -- the HTTP
//!   service and its client

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use mucha_caption::{
    CaptionGenerator, CaptionRequest, CaptionSuggestion, Platform, caption_prompt, extract_json,
    parse_json,
};
pub use mucha_core::{
    GenerateRequest, GenerateResponse, Input, MediaSource, Message, Output, Role, init_telemetry,
    shutdown_telemetry,
};
pub use mucha_error::{
    BackendError, CaptionError, CaptionErrorKind, ConfigError, GeminiError, GeminiErrorKind,
    HttpError, JsonError, MuchaError, MuchaErrorKind, MuchaResult, ServerError, ServerErrorKind,
    StorageError, StorageErrorKind,
};
pub use mucha_interface::{Metadata, ModelMetadata, MuchaDriver, Vision};
pub use mucha_models::GeminiClient;
pub use mucha_post::{
    CropPosition, MediaAttachment, MediaKind, PROFILE_KEY, Profile, ProfileStore, StudioState,
    compose_share_text, seed_profiles, share_target_url,
};
pub use mucha_preview::{
    MediaFrame, PostPreview, PreviewHeader, PreviewSection, render_preview,
};
pub use mucha_server::{
    ApiState, CaptionApiClient, ServerConfig, create_router, serve,
};
pub use mucha_storage::{FileStore, KeyValueStore, MemoryStore};
