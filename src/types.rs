//! Wire types for the FlyDeals API
//!
//! ## Table of Contents
//! - **Deal**: A published flight offer record
//! - **DealsResponse**: Pagination envelope for deal listings
//! - **DealFilters / SortOrder**: Optional query parameters for listings
//! - **PriceAlert / Destination / Analytics**: Remaining API payloads
//!
//! All shapes match the backend JSON exactly (snake_case keys, RFC 3339
//! timestamps). The service owns every entity; nothing here is mutated
//! locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A published flight offer record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    /// Numeric identity
    pub id: i64,
    /// Headline shown in listings
    pub title: String,
    /// URL-safe unique identifier
    pub slug: String,
    /// Route origin city
    pub departure_city: String,
    /// Route destination city
    pub destination_city: String,
    /// Offer price, always >= 0
    pub price: i64,
    /// ISO currency code
    pub currency: String,
    /// Free-text travel window
    pub travel_dates: String,
    /// Outbound booking link
    #[serde(default)]
    pub affiliate_url: String,
    /// Markdown body
    pub content: String,
    /// Optional hero image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Whether the deal is publicly visible
    pub published: bool,
    /// Pre-discount price, when the deal advertises a markdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    /// When the offer stops being valid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Earliest time the deal becomes visible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Engagement counter incremented by click tracking
    #[serde(default)]
    pub click_count: i64,
    /// Free-form labels
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// One page of deals plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealsResponse {
    /// Deals on this page
    pub deals: Vec<Deal>,
    /// Total matching deals across all pages
    pub total: i64,
    /// Page number (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
}

/// Payload for creating a deal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDealInput {
    /// Headline
    pub title: String,
    /// Route origin city
    pub departure_city: String,
    /// Route destination city
    pub destination_city: String,
    /// Offer price
    pub price: i64,
    /// ISO currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Free-text travel window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_dates: Option<String>,
    /// Outbound booking link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_url: Option<String>,
    /// Markdown body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Hero image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Publish immediately
    #[serde(default)]
    pub published: bool,
    /// Pre-discount price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    /// Offer expiry, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// Scheduled publication time, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    /// Free-form labels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Partial payload for updating a deal; only supplied fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDealInput {
    /// Headline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Route origin city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_city: Option<String>,
    /// Route destination city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_city: Option<String>,
    /// Offer price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// ISO currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Free-text travel window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_dates: Option<String>,
    /// Outbound booking link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_url: Option<String>,
    /// Markdown body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Hero image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Visibility flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    /// Pre-discount price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    /// Offer expiry, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// Scheduled publication time, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    /// Free-form labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Destination aggregate derived server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    /// Destination city name
    pub city: String,
    /// Number of currently published deals for the city
    pub deal_count: i64,
}

/// Wire envelope for the destinations listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationsResponse {
    /// Destination aggregates, most deals first
    pub destinations: Vec<Destination>,
}

/// A price alert owned by a subscriber, identified by email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceAlert {
    /// Numeric identity
    pub id: i64,
    /// Subscriber email
    pub email: String,
    /// Optional route origin constraint
    #[serde(default)]
    pub departure_city: String,
    /// Watched destination city
    pub destination_city: String,
    /// Alert fires at or below this price
    pub target_price: i64,
    /// ISO currency code
    pub currency: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a price alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceAlertInput {
    /// Subscriber email
    pub email: String,
    /// Optional route origin constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_city: Option<String>,
    /// Watched destination city
    pub destination_city: String,
    /// Alert fires at or below this price
    pub target_price: i64,
    /// ISO currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Wire envelope for a subscriber's price alerts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceAlertsResponse {
    /// Alerts belonging to the queried email
    pub alerts: Vec<PriceAlert>,
}

/// A newsletter subscriber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    /// Numeric identity
    pub id: i64,
    /// Subscriber email
    pub email: String,
    /// Subscription timestamp
    pub created_at: DateTime<Utc>,
}

/// Wire envelope for the admin subscriber listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribersResponse {
    /// All subscribers
    pub subscribers: Vec<Subscriber>,
    /// Subscriber count
    pub total: i64,
}

/// Successful admin login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Bearer token for subsequent admin requests
    pub token: String,
}

/// Generic confirmation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Read-only aggregate snapshot for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
    /// Total deals, published or not
    pub total_deals: i64,
    /// Currently published deals
    pub published_deals: i64,
    /// Sum of click counters across all deals
    pub total_clicks: i64,
    /// Newsletter subscriber count
    pub subscribers: i64,
    /// Deals ranked by click count
    pub top_deals: Vec<TopDeal>,
}

/// One entry in the click-count ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDeal {
    /// Deal identity
    pub id: i64,
    /// Deal headline
    pub title: String,
    /// Engagement counter
    pub click_count: i64,
}

/// Sort order for deal listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recently created first (server default)
    #[default]
    Newest,
    /// Oldest first
    Oldest,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
}

impl SortOrder {
    /// Query-string value for this order
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional query parameters narrowing a deals listing.
///
/// Absent fields are omitted from the query string entirely; the server
/// applies its own defaults.
#[derive(Debug, Clone, Default)]
pub struct DealFilters {
    /// Free-text search over title and route cities
    pub q: Option<String>,
    /// Exact departure city match (case-insensitive server-side)
    pub departure: Option<String>,
    /// Exact destination city match (case-insensitive server-side)
    pub destination: Option<String>,
    /// Minimum price, inclusive
    pub min_price: Option<i64>,
    /// Maximum price, inclusive
    pub max_price: Option<i64>,
    /// Single tag filter
    pub tag: Option<String>,
    /// Result ordering
    pub sort: Option<SortOrder>,
}

impl DealFilters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term
    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Filter by departure city
    pub fn departure(mut self, city: impl Into<String>) -> Self {
        self.departure = Some(city.into());
        self
    }

    /// Filter by destination city
    pub fn destination(mut self, city: impl Into<String>) -> Self {
        self.destination = Some(city.into());
        self
    }

    /// Set the minimum price
    pub fn min_price(mut self, price: i64) -> Self {
        self.min_price = Some(price);
        self
    }

    /// Set the maximum price
    pub fn max_price(mut self, price: i64) -> Self {
        self.max_price = Some(price);
        self
    }

    /// Filter by tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the result ordering
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Query pairs for the set fields, in the API's canonical order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(departure) = &self.departure {
            pairs.push(("departure", departure.clone()));
        }
        if let Some(destination) = &self.destination {
            pairs.push(("destination", destination.clone()));
        }
        if let Some(min_price) = self.min_price {
            pairs.push(("min_price", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("max_price", max_price.to_string()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_no_pairs() {
        assert!(DealFilters::new().query_pairs().is_empty());
    }

    #[test]
    fn filters_emit_only_set_keys_in_order() {
        let filters = DealFilters::new()
            .destination("Paris")
            .sort(SortOrder::PriceAsc);
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("destination", "Paris".to_string()),
                ("sort", "price_asc".to_string()),
            ]
        );
    }

    #[test]
    fn sort_order_query_values() {
        assert_eq!(SortOrder::Newest.as_str(), "newest");
        assert_eq!(SortOrder::Oldest.as_str(), "oldest");
        assert_eq!(SortOrder::PriceAsc.as_str(), "price_asc");
        assert_eq!(SortOrder::PriceDesc.as_str(), "price_desc");
        assert_eq!(SortOrder::default(), SortOrder::Newest);
    }

    #[test]
    fn deal_decodes_backend_payload() {
        let body = r###"{
            "id": 7,
            "title": "Berlin to Lisbon from 49",
            "slug": "berlin-lisbon-49",
            "departure_city": "Berlin",
            "destination_city": "Lisbon",
            "price": 49,
            "currency": "EUR",
            "travel_dates": "Mar-May 2026",
            "affiliate_url": "https://booking.example/xyz",
            "content": "## Great fares",
            "image_url": "",
            "published": true,
            "original_price": 120,
            "expires_at": "2026-05-01T00:00:00Z",
            "click_count": 42,
            "tags": ["weekend", "europe"],
            "created_at": "2026-01-15T09:30:00Z",
            "updated_at": "2026-02-01T12:00:00Z"
        }"###;

        let deal: Deal = serde_json::from_str(body).expect("deal should decode");
        assert_eq!(deal.slug, "berlin-lisbon-49");
        assert_eq!(deal.price, 49);
        assert_eq!(deal.original_price, Some(120));
        assert!(deal.scheduled_at.is_none());
        assert_eq!(deal.tags, vec!["weekend", "europe"]);
    }

    #[test]
    fn partial_update_serializes_only_supplied_fields() {
        let update = UpdateDealInput {
            price: Some(39),
            published: Some(true),
            ..UpdateDealInput::default()
        };
        let json = serde_json::to_value(&update).expect("update should encode");
        assert_eq!(json, serde_json::json!({"price": 39, "published": true}));
    }

    #[test]
    fn price_alert_input_omits_absent_departure() {
        let input = PriceAlertInput {
            email: "a@b.com".to_string(),
            departure_city: None,
            destination_city: "Rome".to_string(),
            target_price: 80,
            currency: Some("EUR".to_string()),
        };
        let json = serde_json::to_value(&input).expect("alert should encode");
        assert_eq!(
            json,
            serde_json::json!({
                "email": "a@b.com",
                "destination_city": "Rome",
                "target_price": 80,
                "currency": "EUR"
            })
        );
    }
}
