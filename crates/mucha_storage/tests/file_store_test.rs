//! Tests for the filesystem key-value store.

use mucha_storage::{FileStore, KeyValueStore};
use tempfile::TempDir;

#[tokio::test]
async fn put_and_get_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path()).unwrap();

    store.put("mucha.profiles", "[{\"id\":\"a\"}]").await.unwrap();
    let value = store.get("mucha.profiles").await.unwrap();

    assert_eq!(value.as_deref(), Some("[{\"id\":\"a\"}]"));
}

#[tokio::test]
async fn missing_key_reads_as_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path()).unwrap();

    assert!(store.get("mucha.profiles").await.unwrap().is_none());
}

#[tokio::test]
async fn overwrite_is_last_writer_wins() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path()).unwrap();

    store.put("k", "first").await.unwrap();
    store.put("k", "second").await.unwrap();

    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn remove_deletes_and_tolerates_absence() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path()).unwrap();

    store.put("k", "v").await.unwrap();
    store.remove("k").await.unwrap();
    assert!(store.get("k").await.unwrap().is_none());

    // Removing again is not an error
    store.remove("k").await.unwrap();
}

#[tokio::test]
async fn no_temp_file_remains_after_write() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path()).unwrap();

    store.put("k", "v").await.unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name.to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn path_escaping_keys_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path()).unwrap();

    assert!(store.get("../outside").await.is_err());
    assert!(store.put("a/b", "v").await.is_err());
    assert!(store.put("", "v").await.is_err());
}

#[tokio::test]
async fn reopening_the_store_sees_persisted_values() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = FileStore::new(temp_dir.path()).unwrap();
        store.put("mucha.profiles", "[]").await.unwrap();
    }

    let reopened = FileStore::new(temp_dir.path()).unwrap();
    assert_eq!(
        reopened.get("mucha.profiles").await.unwrap().as_deref(),
        Some("[]")
    );
}
