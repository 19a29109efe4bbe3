// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the event photo service.
//!
//! One [`ApiClient`] is built at startup and shared by every request: the
//! collection fetch at launch, the per-tile image fetches, and the download
//! pipeline. Transport details stay in this module; callers only see
//! [`PhotoPayload`] values, raw bytes, and [`FetchError`].

use crate::collection::PhotoPayload;

/// Default service endpoint for event photo sets.
pub const DEFAULT_BASE_URL: &str = "https://api.lyhsca.org/v1";

/// User agent sent with every request.
const USER_AGENT: &str = concat!("Photowall/", env!("CARGO_PKG_VERSION"));

/// Result type for photo service operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors raised while talking to the photo service.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The HTTP client could not be built or the request failed in transit.
    Transport(String),
    /// The service answered with a non-success status code.
    Status(u16),
    /// The response body could not be decoded as a photo payload.
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "transport failure: {msg}"),
            FetchError::Status(code) => write!(f, "HTTP status: {code}"),
            FetchError::Decode(msg) => write!(f, "payload decode failure: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Shared HTTP client scoped to one photo service base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Builds a client for the given base URL.
    ///
    /// A trailing slash on the base URL is tolerated; request paths are
    /// joined without doubling it.
    pub fn new(base_url: impl Into<String>) -> FetchResult<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { base_url, http })
    }

    /// Returns the configured base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the photo set for one event key.
    ///
    /// The body is decoded as [`PhotoPayload`]; shape normalization happens
    /// in the collection layer, not here.
    pub async fn fetch_event_photos(&self, event_key: &str) -> FetchResult<PhotoPayload> {
        let url = format!("{}/events/photos/{}", self.base_url, event_key);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Fetches the raw bytes behind a single locator.
    ///
    /// Used for gallery tiles and for the download pipeline; both want the
    /// unmodified asset body.
    pub async fn fetch_image_bytes(&self, locator: &str) -> FetchResult<Vec<u8>> {
        let response = self
            .http
            .get(locator)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_strips_trailing_slash() {
        let client = ApiClient::new("https://example.test/v1/").expect("client should build");
        assert_eq!(client.base_url(), "https://example.test/v1");
    }

    #[test]
    fn default_base_url_has_no_trailing_slash() {
        assert!(!DEFAULT_BASE_URL.ends_with('/'));
    }

    #[test]
    fn fetch_error_display() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP status: 404");
        assert!(FetchError::Transport("dns".into())
            .to_string()
            .contains("dns"));
        assert!(FetchError::Decode("eof".into()).to_string().contains("eof"));
    }
}
