//! API utilities for frontend-backend communication

use std::sync::Arc;

use super::api_client::{ApiClient, BrowserNavigator, FetchTransport};
use super::config::effective_api_url;
use crate::system::auth::storage::LocalStorageTokenStore;

/// Base URL for API requests, without a trailing slash.
pub fn api_base() -> String {
    effective_api_url()
}

/// Client wired to the browser: fetch, `localStorage` token, hard redirect on 401.
pub fn api_client() -> ApiClient {
    ApiClient::new(
        api_base(),
        Arc::new(FetchTransport),
        Arc::new(LocalStorageTokenStore),
        Arc::new(BrowserNavigator),
    )
}
