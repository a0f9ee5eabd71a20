//! HTTP client for the FlyDeals API
//!
//! ## Table of Contents
//! - **DealsClient**: Typed client covering every public and admin operation
//! - **RequestOptions**: Body and extra headers for the core request primitive
//! - **AuthStatus**: Outcome of the admin session guard
//!
//! The client is the single choke point for network I/O: base URL resolution,
//! auth header injection, JSON (de)serialization, and error normalization all
//! happen here. Every call is exactly one round trip; there is no retry,
//! request deduplication, or response caching.

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::session::AdminSession;
use crate::types::{
    Analytics, CreateDealInput, Deal, DealFilters, DealsResponse, Destination,
    DestinationsResponse, LoginResponse, MessageResponse, PriceAlert, PriceAlertInput,
    PriceAlertsResponse, SubscribersResponse, UpdateDealInput,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Error body convention of the API: `{"error": "<message>"}`.
/// Absence or malformation is tolerated.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Optional body and extra headers for [`DealsClient::request`].
///
/// Caller-supplied headers are merged after the client's defaults and are
/// never dropped; on a name collision the caller wins.
#[derive(Debug, Default)]
pub struct RequestOptions {
    body: Option<serde_json::Value>,
    headers: HeaderMap,
}

impl RequestOptions {
    /// Empty options: no body, no extra headers
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying a JSON body
    pub fn json<T: Serialize>(body: &T) -> Result<Self> {
        Ok(Self {
            body: Some(serde_json::to_value(body)?),
            headers: HeaderMap::new(),
        })
    }

    /// Add an extra header
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Outcome of validating the stored admin session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// No token present; no network call was made
    Missing,
    /// Token was present but rejected; it has been cleared
    Invalid,
    /// Token was accepted by the server
    Valid,
}

/// Typed client for the FlyDeals API
#[derive(Clone)]
pub struct DealsClient {
    client: Client,
    base_url: String,
    session: Arc<AdminSession>,
}

impl DealsClient {
    /// Create a client with a fresh in-memory session
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_session(config, Arc::new(AdminSession::in_memory()))
    }

    /// Create a client over an existing session, e.g. one restored from disk
    pub fn with_session(config: ClientConfig, session: Arc<AdminSession>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url(),
            session,
        })
    }

    /// The session this client attaches tokens from
    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Core request primitive: one round trip, typed response.
    ///
    /// Merges `Content-Type: application/json`, `Cache-Control: no-store`,
    /// and `Authorization: Bearer <token>` when the session holds a token,
    /// then any caller headers from `options`. A non-2xx response becomes
    /// [`ApiError::Http`] carrying the exact status code and the server's
    /// `error` field when one parses.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        debug!(method = %method, path = %path, "api request");

        let mut req = self
            .client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-store");

        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        if !options.headers.is_empty() {
            req = req.headers(options.headers);
        }
        if let Some(body) = &options.body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .unwrap_or_default()
                .error
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            warn!(status = status.as_u16(), path = %path, "api request failed");
            return Err(ApiError::http(status.as_u16(), message));
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::decode(format!("invalid response body: {}", e)))
    }

    // ------------------------------------------------------------------
    // Public operations
    // ------------------------------------------------------------------

    /// Check API reachability; `false` when the service reports not-ready
    pub async fn health(&self) -> Result<bool> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    /// List published deals with pagination and optional filters
    pub async fn get_public_deals(
        &self,
        page: u32,
        limit: u32,
        filters: &DealFilters,
    ) -> Result<DealsResponse> {
        let mut pairs: Vec<(&str, String)> =
            vec![("page", page.to_string()), ("limit", limit.to_string())];
        pairs.extend(filters.query_pairs());
        let path = format!("/deals?{}", encode_query(&pairs));
        self.request(Method::GET, &path, RequestOptions::new()).await
    }

    /// Fetch one published deal; fails with a 404 error for unknown slugs
    pub async fn get_deal_by_slug(&self, slug: &str) -> Result<Deal> {
        self.request(
            Method::GET,
            &format!("/deals/{}", slug),
            RequestOptions::new(),
        )
        .await
    }

    /// Fire-and-forget increment of a deal's click counter
    pub async fn track_click(&self, slug: &str) -> Result<()> {
        let _: MessageResponse = self
            .request(
                Method::POST,
                &format!("/deals/{}/click", slug),
                RequestOptions::new(),
            )
            .await?;
        Ok(())
    }

    /// Destination cities with their published deal counts
    pub async fn get_destinations(&self) -> Result<Vec<Destination>> {
        let resp: DestinationsResponse = self
            .request(Method::GET, "/destinations", RequestOptions::new())
            .await?;
        Ok(resp.destinations)
    }

    /// Subscribe an email to the newsletter
    pub async fn subscribe(&self, email: &str) -> Result<MessageResponse> {
        let body = serde_json::json!({ "email": email });
        self.request(Method::POST, "/subscribe", RequestOptions::json(&body)?)
            .await
    }

    /// Remove an email from the newsletter
    pub async fn unsubscribe(&self, email: &str) -> Result<MessageResponse> {
        let body = serde_json::json!({ "email": email });
        self.request(Method::DELETE, "/subscribe", RequestOptions::json(&body)?)
            .await
    }

    /// Create a price alert.
    ///
    /// Alerts are scoped by email only; the API requires no secret to list or
    /// delete them later. That trust boundary belongs to the service, not the
    /// client.
    pub async fn create_price_alert(&self, input: &PriceAlertInput) -> Result<PriceAlert> {
        self.request(Method::POST, "/price-alerts", RequestOptions::json(input)?)
            .await
    }

    /// List price alerts belonging to an email
    pub async fn get_price_alerts(&self, email: &str) -> Result<Vec<PriceAlert>> {
        let path = format!(
            "/price-alerts?{}",
            encode_query(&[("email", email.to_string())])
        );
        let resp: PriceAlertsResponse =
            self.request(Method::GET, &path, RequestOptions::new()).await?;
        Ok(resp.alerts)
    }

    /// Delete a price alert by id
    pub async fn delete_price_alert(&self, id: i64) -> Result<MessageResponse> {
        self.request(
            Method::DELETE,
            &format!("/price-alerts/{}", id),
            RequestOptions::new(),
        )
        .await
    }

    // ------------------------------------------------------------------
    // Admin operations
    // ------------------------------------------------------------------

    /// Log in as admin.
    ///
    /// On success the returned token is stored in the session before this
    /// method returns, so every subsequent call on this client carries it.
    pub async fn admin_login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp: LoginResponse = self
            .request(Method::POST, "/admin/login", RequestOptions::json(&body)?)
            .await?;
        self.session.set_token(&resp.token).await?;
        info!("admin session established");
        Ok(resp)
    }

    /// Destroy the admin session token
    pub async fn logout(&self) -> Result<()> {
        self.session.clear().await?;
        info!("admin session cleared");
        Ok(())
    }

    /// Validate the stored session with a minimal authenticated request.
    ///
    /// Without a token this returns [`AuthStatus::Missing`] immediately, no
    /// network call. A rejected token is cleared and reported as
    /// [`AuthStatus::Invalid`]. Expiry is only ever discovered reactively;
    /// nothing polls or refreshes.
    pub async fn validate_session(&self) -> Result<AuthStatus> {
        if !self.session.is_authenticated() {
            return Ok(AuthStatus::Missing);
        }

        match self.get_admin_deals(1, 1).await {
            Ok(_) => Ok(AuthStatus::Valid),
            Err(err) => {
                debug!(error = %err, "stored admin token rejected");
                self.session.clear().await?;
                Ok(AuthStatus::Invalid)
            }
        }
    }

    /// List all deals, published or not, for the admin panel
    pub async fn get_admin_deals(&self, page: u32, limit: u32) -> Result<DealsResponse> {
        let path = format!(
            "/admin/deals?{}",
            encode_query(&[("page", page.to_string()), ("limit", limit.to_string())])
        );
        self.request(Method::GET, &path, RequestOptions::new()).await
    }

    /// Create a deal
    pub async fn create_deal(&self, input: &CreateDealInput) -> Result<Deal> {
        self.request(Method::POST, "/admin/deals", RequestOptions::json(input)?)
            .await
    }

    /// Update a deal; only fields supplied in `input` change
    pub async fn update_deal(&self, id: i64, input: &UpdateDealInput) -> Result<Deal> {
        self.request(
            Method::PUT,
            &format!("/admin/deals/{}", id),
            RequestOptions::json(input)?,
        )
        .await
    }

    /// Delete a deal by id
    pub async fn delete_deal(&self, id: i64) -> Result<MessageResponse> {
        self.request(
            Method::DELETE,
            &format!("/admin/deals/{}", id),
            RequestOptions::new(),
        )
        .await
    }

    /// Aggregate analytics snapshot
    pub async fn get_analytics(&self) -> Result<Analytics> {
        self.request(Method::GET, "/admin/analytics", RequestOptions::new())
            .await
    }

    /// Full newsletter subscriber list
    pub async fn get_admin_subscribers(&self) -> Result<SubscribersResponse> {
        self.request(Method::GET, "/admin/subscribers", RequestOptions::new())
            .await
    }
}

fn encode_query(pairs: &[(&str, String)]) -> String {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        ser.append_pair(key, value);
    }
    ser.finish()
}
