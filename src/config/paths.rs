//! Path management for BudgetBook
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/budgetbook` on Linux, `%APPDATA%\budgetbook` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGETBOOK_DATA_DIR";

/// Manages all paths used by BudgetBook
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "budgetbook")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    BudgetError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory backing the key-value store
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
