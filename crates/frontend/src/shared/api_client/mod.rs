//! Shared HTTP client for the billing API.
//!
//! Every screen goes through [`ApiClient`]: it prefixes the configured base
//! URL, sends JSON, attaches the bearer token on each request and handles
//! 401/404 centrally before handing errors back to the page.

mod client;
mod error;
mod navigator;
mod transport;

#[cfg(test)]
pub mod testing;

pub use client::ApiClient;
pub use error::ApiError;
pub use navigator::{BrowserNavigator, Navigator, LOGIN_PATH};
pub use transport::{ApiRequest, FetchTransport, HttpMethod, HttpTransport, RawResponse};
