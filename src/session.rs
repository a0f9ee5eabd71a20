//! Admin session and token lifecycle
//!
//! ## Table of Contents
//! - **AdminSession**: Explicit session object owning the bearer token
//!
//! The token is created by a successful admin login, attached to every
//! subsequent request while present, and destroyed on logout or when the
//! server rejects it. The session is an injected object rather than ambient
//! global state: construct one, share it, and hand it to the client.

use crate::error::Result;
use crate::store::{keys, BoxedStateStore};
use parking_lot::RwLock;

/// Holder of the admin bearer token.
///
/// Reads are synchronous and side-effect-free; writes go through the optional
/// backing [`StateStore`](crate::store::StateStore) so the session survives a
/// restart when a persistent store is attached.
pub struct AdminSession {
    cached: RwLock<Option<String>>,
    store: Option<BoxedStateStore>,
}

impl AdminSession {
    /// Create a session with no persistence; the token lives only in memory
    pub fn in_memory() -> Self {
        Self {
            cached: RwLock::new(None),
            store: None,
        }
    }

    /// Create a session backed by a store, restoring any previously saved token
    pub async fn with_store(store: BoxedStateStore) -> Result<Self> {
        let token = store.get(keys::ADMIN_TOKEN).await?;
        Ok(Self {
            cached: RwLock::new(token),
            store: Some(store),
        })
    }

    /// Current bearer token, or `None` when not logged in
    pub fn token(&self) -> Option<String> {
        self.cached.read().clone()
    }

    /// True when a token is present
    pub fn is_authenticated(&self) -> bool {
        self.cached.read().is_some()
    }

    /// Persist a token, overwriting any existing one
    pub async fn set_token(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        if let Some(store) = &self.store {
            store.set(keys::ADMIN_TOKEN, token.clone()).await?;
        }
        *self.cached.write() = Some(token);
        Ok(())
    }

    /// Destroy the token
    pub async fn clear(&self) -> Result<()> {
        if let Some(store) = &self.store {
            store.remove(keys::ADMIN_TOKEN).await?;
        }
        *self.cached.write() = None;
        Ok(())
    }
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{memory_store, FileStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn token_lifecycle_in_memory() {
        let session = AdminSession::in_memory();
        assert!(session.token().is_none());
        assert!(!session.is_authenticated());

        session.set_token("abc").await.unwrap();
        assert_eq!(session.token(), Some("abc".to_string()));
        assert!(session.is_authenticated());

        session.set_token("def").await.unwrap();
        assert_eq!(session.token(), Some("def".to_string()));

        session.clear().await.unwrap();
        assert!(session.token().is_none());
    }

    #[tokio::test]
    async fn store_backed_session_restores_token() {
        let store = memory_store();
        {
            let session = AdminSession::with_store(store.clone()).await.unwrap();
            session.set_token("persisted").await.unwrap();
        }

        let restored = AdminSession::with_store(store).await.unwrap();
        assert_eq!(restored.token(), Some("persisted".to_string()));
    }

    #[tokio::test]
    async fn clear_removes_token_from_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let store = Arc::new(FileStore::open(&path).unwrap());

        let session = AdminSession::with_store(store.clone()).await.unwrap();
        session.set_token("abc").await.unwrap();
        session.clear().await.unwrap();

        let reopened = AdminSession::with_store(Arc::new(FileStore::open(&path).unwrap()))
            .await
            .unwrap();
        assert!(reopened.token().is_none());
    }
}
