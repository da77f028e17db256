//! HTTP fetch client for the Stride inventory service.
//!
//! Provides a small, ergonomic wrapper over `reqwest` with base-URL joining
//! and automatic JSON handling.
//!
//! # Example
//!
//! ```rust,ignore
//! use stride_data::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Product {
//!     id: i64,
//!     name: String,
//! }
//!
//! let client = FetchClient::new().with_base_url("http://localhost:3333");
//! let product: Product = client.get_json("/products/5").await?;
//! ```

mod error;
mod response;

pub use error::FetchError;
pub use response::Response;

use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for outbound requests.
pub struct FetchClient {
    client: reqwest::Client,
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve a path against the configured base URL.
    ///
    /// Absolute URLs pass through untouched.
    fn full_url(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => {
                if path.starts_with("http://") || path.starts_with("https://") {
                    path.to_string()
                } else {
                    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
                }
            }
            None => path.to_string(),
        }
    }

    /// Send a GET request and buffer the response.
    pub async fn get(&self, path: &str) -> Result<Response, FetchError> {
        let url = self.full_url(path);
        let resp = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        Ok(Response::new(status, url, body))
    }

    /// Send a GET request, enforce a 2xx status, and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.get(path).await?.error_for_status()?.json()
    }
}
