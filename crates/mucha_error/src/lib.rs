//! Error types for the Mucha workspace.
//!
//! This crate provides the foundation error types used throughout the Mucha
//! ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use mucha_error::{MuchaResult, HttpError};
//!
//! fn call_endpoint() -> MuchaResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match call_endpoint() {
//!     Ok(body) => println!("Got: {}", body),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod caption;
mod config;
mod error;
mod gemini;
mod http;
mod json;
mod server;
mod storage;

pub use backend::BackendError;
pub use caption::{CaptionError, CaptionErrorKind};
pub use config::ConfigError;
pub use error::{MuchaError, MuchaErrorKind, MuchaResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
