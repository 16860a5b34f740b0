//! Path management for coffer
//!
//! Provides XDG-compliant path resolution for the data directory and the
//! database file.
//!
//! ## Path Resolution Order
//!
//! 1. `COFFER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/coffer` or `~/.config/coffer`
//! 3. Windows: `%APPDATA%\coffer`

use std::path::PathBuf;

use crate::error::{CofferError, CofferResult};

/// Manages all paths used by coffer
#[derive(Debug, Clone)]
pub struct CofferPaths {
    /// Base directory for all coffer data
    base_dir: PathBuf,
}

impl CofferPaths {
    /// Create a new CofferPaths instance
    ///
    /// Path resolution:
    /// 1. `COFFER_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/coffer` or `~/.config/coffer`
    /// 3. Windows: `%APPDATA%\coffer`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> CofferResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("COFFER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CofferPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/coffer/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/coffer/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the SQLite database file
    pub fn database_file(&self) -> PathBuf {
        self.data_dir().join("coffer.db")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> CofferResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CofferError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CofferError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> CofferResult<PathBuf> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| CofferError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("coffer"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> CofferResult<PathBuf> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CofferError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("coffer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CofferPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.database_file(),
            temp_dir.path().join("data").join("coffer.db")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CofferPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }
}
