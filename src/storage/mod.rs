//! Storage layer for BudgetBook
//!
//! All state lives in a string key-value store. The [`KeyValueStore`] trait
//! is the only thing the registry and ledgers depend on; [`MemoryStore`]
//! keeps everything in process and [`FileStore`] writes one file per key
//! with atomic renames.

pub mod file_store;
pub mod keys;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetResult;

/// String key-value store contract
pub trait KeyValueStore {
    /// Read the value for `key`, `None` when absent
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Replace the value for `key`
    fn set(&self, key: &str, value: &str) -> BudgetResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn delete(&self, key: &str) -> BudgetResult<()>;
}

/// Read and decode a JSON value
///
/// Absent keys and blobs that fail to decode both yield `None`; the latter
/// is logged and otherwise treated as "no data".
pub fn read_json<T, S>(store: &S, key: &str) -> BudgetResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring malformed stored value");
            Ok(None)
        }
    }
}

/// Encode a value as JSON and store it
pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> BudgetResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
