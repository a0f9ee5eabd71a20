//! # FlyDeals SDK
//!
//! Typed Rust client for the FlyDeals flight-deals REST API: deal browsing
//! with search, filters and pagination, newsletter subscription, price
//! alerts, and the authenticated admin surface (login, deal CRUD, analytics,
//! subscriber list).
//!
//! ## Features
//!
//! - **Single choke point**: every network call goes through one typed
//!   request primitive with uniform error normalization
//! - **Explicit session**: the admin bearer token lives in an injected
//!   [`AdminSession`], optionally persisted through a [`StateStore`](store::StateStore)
//! - **Typed errors**: non-2xx responses become [`ApiError::Http`] with a
//!   guaranteed status code, so a 401 is distinguishable by pattern matching
//! - **Local preferences**: home city, favorites, and theme stored the same
//!   way the token is
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flydeals_sdk::{ClientConfig, DealFilters, DealsClient, SortOrder};
//!
//! #[tokio::main]
//! async fn main() -> flydeals_sdk::Result<()> {
//!     let client = DealsClient::new(ClientConfig::from_env())?;
//!
//!     let filters = DealFilters::new()
//!         .destination("Lisbon")
//!         .sort(SortOrder::PriceAsc);
//!     let page = client.get_public_deals(1, 20, &filters).await?;
//!
//!     for deal in page.deals {
//!         println!(
//!             "{} -> {}: {} {}",
//!             deal.departure_city, deal.destination_city, deal.price, deal.currency
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Admin usage
//!
//! ```rust,no_run
//! use flydeals_sdk::{AuthStatus, ClientConfig, DealsClient};
//!
//! #[tokio::main]
//! async fn main() -> flydeals_sdk::Result<()> {
//!     let client = DealsClient::new(ClientConfig::default())?;
//!     client.admin_login("admin@flydeals.example", "secret").await?;
//!
//!     match client.validate_session().await? {
//!         AuthStatus::Valid => println!("session ok"),
//!         AuthStatus::Missing | AuthStatus::Invalid => println!("log in again"),
//!     }
//!
//!     let analytics = client.get_analytics().await?;
//!     println!("{} clicks across {} deals", analytics.total_clicks, analytics.total_deals);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod prefs;
pub mod session;
pub mod store;
pub mod types;

// Re-exports for ergonomic API
pub use client::{AuthStatus, DealsClient, RequestOptions};
pub use config::{ClientConfig, DEFAULT_BASE_URL, FLYDEALS_API_ENV};
pub use error::{ApiError, Result};
pub use prefs::{Preferences, Theme};
pub use session::AdminSession;
pub use store::{memory_store, BoxedStateStore, FileStore, MemoryStore, StateStore};
pub use types::{
    Analytics, CreateDealInput, Deal, DealFilters, DealsResponse, Destination, LoginResponse,
    MessageResponse, PriceAlert, PriceAlertInput, SortOrder, Subscriber, SubscribersResponse,
    TopDeal, UpdateDealInput,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{AuthStatus, DealsClient};
    pub use crate::config::ClientConfig;
    pub use crate::error::{ApiError, Result};
    pub use crate::prefs::{Preferences, Theme};
    pub use crate::session::AdminSession;
    pub use crate::types::{Deal, DealFilters, DealsResponse, SortOrder};
}
