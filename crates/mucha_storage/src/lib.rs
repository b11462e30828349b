//! Key-value persistence for the Mucha social post studio.
//!
//! The studio persists a handful of small JSON documents (the profile list)
//! under fixed keys, the way a browser keeps them in local storage. This
//! crate abstracts that behind a pluggable [`KeyValueStore`] trait so the
//! same logic is testable without a real storage backend.
//!
//! Writes are synchronous from the caller's perspective and last-writer-wins;
//! there is no transactional guarantee, and none is needed with a single
//! writer.
//!
//! # Example
//!
//! ```
//! use mucha_storage::{KeyValueStore, MemoryStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//! store.put("mucha.profiles", "[]").await?;
//! assert_eq!(store.get("mucha.profiles").await?.as_deref(), Some("[]"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;
mod memory;
mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

pub use mucha_error::{StorageError, StorageErrorKind};
