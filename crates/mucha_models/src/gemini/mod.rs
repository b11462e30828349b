//! Google Gemini API client implementation.
//!
//! The REST client supports per-request model selection with lazy,
//! thread-safe client pooling: one underlying `gemini-rust` client is
//! created per model name on first use and reused afterwards.

mod client;

pub use client::GeminiClient;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, mucha_error::GeminiError>;
