//! Caption generation HTTP service for the Mucha social post studio.
//!
//! One route does the work: `POST /api/chat` accepts a caption request,
//! validates it, and runs the generation round trip. `GET /health` reports
//! liveness. [`CaptionApiClient`] is the matching client-side request
//! service: one outbound call per invocation, no retries, no timeout.
//!
//! # Example
//!
//! ```no_run
//! use mucha_caption::CaptionGenerator;
//! use mucha_models::GeminiClient;
//! use mucha_server::{ApiState, ServerConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env();
//!     let driver = GeminiClient::with_default_model(&config.model)?;
//!     let state = ApiState::new(CaptionGenerator::new(driver));
//!     serve(&config.bind_addr, state).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod client;
mod config;

pub use api::{
    ApiState, GENERATION_FAILED_MESSAGE, MISSING_CONTENT_MESSAGE, create_router, serve,
};
pub use client::CaptionApiClient;
pub use config::ServerConfig;

pub use mucha_error::{ServerError, ServerErrorKind};
