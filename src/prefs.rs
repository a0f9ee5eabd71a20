//! Local user preferences
//!
//! ## Table of Contents
//! - **Preferences**: Home city, favorites, and theme persisted client-side
//! - **Theme**: Light/dark choice
//!
//! Each preference is an independent, unversioned key in the same store
//! mechanism the admin token uses. A malformed favorites value decodes as an
//! empty list instead of failing the caller.

use crate::error::Result;
use crate::store::{keys, BoxedStateStore};

/// Light/dark theme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// Stored string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Client-side user preferences backed by a [`StateStore`](crate::store::StateStore)
pub struct Preferences {
    store: BoxedStateStore,
}

impl Preferences {
    /// Create preferences over the given store
    pub fn new(store: BoxedStateStore) -> Self {
        Self { store }
    }

    /// Preferred home departure city, if one was saved
    pub async fn home_city(&self) -> Result<Option<String>> {
        self.store.get(keys::HOME_CITY).await
    }

    /// Save the home departure city
    pub async fn set_home_city(&self, city: impl Into<String>) -> Result<()> {
        self.store.set(keys::HOME_CITY, city.into()).await
    }

    /// Forget the home departure city
    pub async fn clear_home_city(&self) -> Result<()> {
        self.store.remove(keys::HOME_CITY).await
    }

    /// Favorited deal ids; malformed stored data reads as empty
    pub async fn favorites(&self) -> Result<Vec<i64>> {
        let raw = self.store.get(keys::FAVORITES).await?;
        Ok(raw
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default())
    }

    /// True when the deal id is favorited
    pub async fn is_favorite(&self, deal_id: i64) -> Result<bool> {
        Ok(self.favorites().await?.contains(&deal_id))
    }

    /// Toggle a deal id in the favorites list; returns the new state
    pub async fn toggle_favorite(&self, deal_id: i64) -> Result<bool> {
        let mut ids = self.favorites().await?;
        let favorited = if let Some(pos) = ids.iter().position(|&id| id == deal_id) {
            ids.remove(pos);
            false
        } else {
            ids.push(deal_id);
            true
        };
        self.store
            .set(keys::FAVORITES, serde_json::to_string(&ids)?)
            .await?;
        Ok(favorited)
    }

    /// Saved theme choice, if any
    pub async fn theme(&self) -> Result<Option<Theme>> {
        let raw = self.store.get(keys::THEME).await?;
        Ok(raw.as_deref().and_then(Theme::parse))
    }

    /// Save the theme choice
    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(keys::THEME, theme.as_str().to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_store;

    #[tokio::test]
    async fn home_city_roundtrip() {
        let prefs = Preferences::new(memory_store());
        assert!(prefs.home_city().await.unwrap().is_none());

        prefs.set_home_city("Berlin").await.unwrap();
        assert_eq!(prefs.home_city().await.unwrap(), Some("Berlin".to_string()));

        prefs.clear_home_city().await.unwrap();
        assert!(prefs.home_city().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn toggle_favorite_adds_then_removes() {
        let prefs = Preferences::new(memory_store());

        assert!(prefs.toggle_favorite(7).await.unwrap());
        assert!(prefs.toggle_favorite(12).await.unwrap());
        assert!(prefs.is_favorite(7).await.unwrap());
        assert_eq!(prefs.favorites().await.unwrap(), vec![7, 12]);

        assert!(!prefs.toggle_favorite(7).await.unwrap());
        assert!(!prefs.is_favorite(7).await.unwrap());
        assert_eq!(prefs.favorites().await.unwrap(), vec![12]);
    }

    #[tokio::test]
    async fn malformed_favorites_read_as_empty() {
        let store = memory_store();
        store
            .set(crate::store::keys::FAVORITES, "{broken".to_string())
            .await
            .unwrap();

        let prefs = Preferences::new(store);
        assert!(prefs.favorites().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn theme_roundtrip_and_unknown_value() {
        let store = memory_store();
        let prefs = Preferences::new(store.clone());

        assert!(prefs.theme().await.unwrap().is_none());
        prefs.set_theme(Theme::Dark).await.unwrap();
        assert_eq!(prefs.theme().await.unwrap(), Some(Theme::Dark));

        store
            .set(crate::store::keys::THEME, "sepia".to_string())
            .await
            .unwrap();
        assert!(prefs.theme().await.unwrap().is_none());
    }
}
