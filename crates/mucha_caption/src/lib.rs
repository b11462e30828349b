//! AI caption generation for the Mucha social post studio.
//!
//! This crate owns the one interaction that matters: turning a raw post idea
//! into a platform-ready caption. It defines the request/suggestion contract,
//! the fixed Czech prompt template, the utilities for pulling a JSON object
//! out of model text, and the driver-generic [`CaptionGenerator`] that ties
//! them together.
//!
//! # Example
//!
//! ```no_run
//! use mucha_caption::{CaptionGenerator, CaptionRequest, Platform};
//! use mucha_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = CaptionGenerator::new(GeminiClient::new()?);
//! let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");
//! let suggestion = generator.generate(&request).await?;
//! println!("{}", suggestion.caption);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod generator;
mod platform;
mod prompt;
mod request;
mod suggestion;

pub use extraction::{extract_json, parse_json};
pub use generator::CaptionGenerator;
pub use platform::Platform;
pub use prompt::caption_prompt;
pub use request::CaptionRequest;
pub use suggestion::CaptionSuggestion;
