//! Unit tests for storage module.

use sabor::error::StorageError;
use sabor::storage::{FileStore, KeyValueStore, MemoryStore, load_json, save_json};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);

    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);

    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    assert!(store.is_empty());
}

#[test]
fn test_memory_store_remove_absent_key() {
    let store = MemoryStore::new();
    assert!(store.remove("missing").is_ok());
}

#[test]
fn test_memory_store_failing_mode() {
    let store = MemoryStore::new();
    store.set("k", "v").unwrap();
    store.set_failing(true);

    assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));
    assert!(store.set("k", "w").is_err());
    assert!(store.remove("k").is_err());

    store.set_failing(false);
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_json_helpers() {
    let store = MemoryStore::new();
    let list = vec!["a@b.co".to_string(), "c@d.co".to_string()];
    save_json(&store, "list", &list).unwrap();

    assert_eq!(store.get("list").unwrap().as_deref(), Some(r#"["a@b.co","c@d.co"]"#));
    let loaded: Option<Vec<String>> = load_json(&store, "list").unwrap();
    assert_eq!(loaded, Some(list));

    let absent: Option<Vec<String>> = load_json(&store, "other").unwrap();
    assert_eq!(absent, None);
}

#[test]
fn test_load_json_unparsable_is_error() {
    let store = MemoryStore::new();
    store.set("list", "{not json").unwrap();
    let result: Result<Option<Vec<String>>, _> = load_json(&store, "list");
    assert!(matches!(result, Err(StorageError::Json(_))));
}

#[test]
fn test_arc_store_delegates() {
    let store = Arc::new(MemoryStore::new());
    let shared = Arc::clone(&store);
    shared.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_file_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("storage.json");

    {
        let store = FileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("a").unwrap(), None);
    assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    assert_eq!(reopened.path(), path.as_path());
}

#[test]
fn test_file_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path().join("storage.json")).unwrap();
    assert_eq!(store.get("anything").unwrap(), None);
    // Nothing written until the first mutation
    assert!(!dir.path().join("storage.json").exists());
}

#[test]
fn test_file_store_corrupt_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "garbage").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("k").unwrap(), None);

    store.set("k", "v").unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"k\""));
}
