//! Persisted key-value storage.
//!
//! The page's durable state lives in a string-keyed store holding JSON
//! strings, scoped to one visitor, with no expiry and no versioning.
//!
//! ## Implementations
//!
//! - `MemoryStore` - in-process map, used by tests and throwaway sessions
//! - `FileStore` - one JSON file in the data directory, written through on
//!   every mutation
//!
//! Concurrent writers are not coordinated: the last write wins.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// String-keyed store of JSON strings.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// Read and deserialize the value under `key`.
///
/// Absent keys yield `Ok(None)`; a present but unparsable value is an error.
pub fn load_json<T, S>(store: &S, key: &str) -> StorageResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` and store it under `key`.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
