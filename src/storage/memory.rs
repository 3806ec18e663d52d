//! In-process key-value store

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};

use super::KeyValueStore;

/// Key-value store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.remove(key);
        Ok(())
    }
}
