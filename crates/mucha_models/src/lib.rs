//! LLM provider integrations for Mucha.
//!
//! This crate provides client implementations for generation providers,
//! each behind its own feature flag for flexible dependency management.
//! Gemini is the only provider the studio ships with today; the feature
//! gate keeps the door open for alternates without forcing their SDKs on
//! every consumer.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use mucha_core::{GenerateRequest, Message};
//! use mucha_interface::MuchaDriver;
//! use mucha_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = GenerateRequest::new(vec![Message::user("Ahoj!")]);
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiClient, GeminiResult};
