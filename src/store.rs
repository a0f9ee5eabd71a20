//! Client-side persistent state
//!
//! ## Table of Contents
//! - **StateStore**: Trait for string key/value storage backends
//! - **MemoryStore**: In-memory store (default, non-persistent)
//! - **FileStore**: JSON-file-backed persistent storage
//! - **keys**: The fixed keys the SDK persists
//!
//! The product keeps a handful of independent string/JSON-encoded values on
//! the client: the admin bearer token, a home city preference, a favorites
//! list, and a theme choice. None are versioned; each is one key.

use crate::error::{ApiError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Trait for string key/value storage backends
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value, overwriting any existing one
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;

    /// Store name for logging
    fn name(&self) -> &str;
}

/// Type alias for a shared store
pub type BoxedStateStore = Arc<dyn StateStore>;

/// Create a memory store
pub fn memory_store() -> BoxedStateStore {
    Arc::new(MemoryStore::new()) as BoxedStateStore
}

/// In-memory store, used by default and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new memory store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self.data.read().await;
        Ok(data.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut data = self.data.write().await;
        data.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut data = self.data.write().await;
        data.remove(key);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// File-based persistent storage
///
/// One JSON object per file; every write is flushed immediately so state
/// survives the process the way browser storage survives a tab.
pub struct FileStore {
    path: PathBuf,
    data: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open or create a file store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let data = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ApiError::storage(format!("Failed to read store: {}", e)))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            HashMap::new()
        };

        info!(path = %path.display(), "File store opened");

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    async fn flush(&self) -> Result<()> {
        let data = self.data.read().await;
        let contents = serde_json::to_string_pretty(&*data)
            .map_err(|e| ApiError::storage(format!("Failed to encode store: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ApiError::storage(format!("Failed to create dir: {}", e)))?;
        }

        std::fs::write(&self.path, contents)
            .map_err(|e| ApiError::storage(format!("Failed to write store: {}", e)))?;

        debug!(path = %self.path.display(), "File store flushed");
        Ok(())
    }
}

#[async_trait]
impl StateStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self.data.read().await;
        Ok(data.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        {
            let mut data = self.data.write().await;
            data.insert(key.to_string(), value);
        }
        self.flush().await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        {
            let mut data = self.data.write().await;
            data.remove(key);
        }
        self.flush().await
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Fixed keys the SDK persists
pub mod keys {
    /// Admin bearer token
    pub const ADMIN_TOKEN: &str = "admin_token";
    /// Preferred home departure city
    pub const HOME_CITY: &str = "home_airport";
    /// Favorited deal ids, JSON array of numbers
    pub const FAVORITES: &str = "favorites";
    /// Light/dark theme choice
    pub const THEME: &str = "theme";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_set_get_remove() {
        let store = MemoryStore::new();

        store
            .set(keys::ADMIN_TOKEN, "abc".to_string())
            .await
            .unwrap();
        assert_eq!(
            store.get(keys::ADMIN_TOKEN).await.unwrap(),
            Some("abc".to_string())
        );

        store.remove(keys::ADMIN_TOKEN).await.unwrap();
        assert!(store.get(keys::ADMIN_TOKEN).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn removing_absent_key_is_ok() {
        let store = MemoryStore::new();
        store.remove("never-set").await.unwrap();
    }

    #[tokio::test]
    async fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.set(keys::THEME, "dark".to_string()).await.unwrap();
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get(keys::THEME).await.unwrap(),
            Some("dark".to_string())
        );
    }

    #[tokio::test]
    async fn file_store_tolerates_corrupt_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.get(keys::THEME).await.unwrap().is_none());
    }
}
