//! Key-value store trait definition.

use mucha_error::MuchaResult;

/// Trait for pluggable key-value storage backends.
///
/// Keys are short fixed names (e.g. `mucha.profiles`); values are opaque
/// strings, JSON-encoded by the caller. Implementations decide where the
/// bytes live.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under a key.
    ///
    /// Returns `Ok(None)` when the key has never been written, so callers
    /// can distinguish "absent" from a read failure.
    async fn get(&self, key: &str) -> MuchaResult<Option<String>>;

    /// Write a value under a key, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> MuchaResult<()>;

    /// Remove a key and its value. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> MuchaResult<()>;
}
