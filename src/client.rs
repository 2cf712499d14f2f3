//! HTTP transport for the Hyperwallet REST API
//!
//! The gateways never talk to `reqwest` directly: they go through the
//! [`Transport`] trait, which executes one request and hands back the raw
//! response body. [`HyperwalletClient`] is the production implementation.

use crate::config::HyperwalletConfig;
use crate::{HyperwalletError, Result};
use async_trait::async_trait;
use http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;

/// Query string pairs appended to a request URL
pub type QueryPairs = Vec<(String, String)>;

/// Characters left untouched when a token is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Single request execution primitive
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute `method` on `path` (relative to the base URL) and return the raw body
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryPairs>,
        body: String,
    ) -> Result<Vec<u8>>;
}

/// Percent-encode a caller-provided token for use in a path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// `reqwest`-backed transport with basic auth and JSON headers
#[derive(Clone)]
pub struct HyperwalletClient {
    base_url: String,
    username: String,
    password: String,
    client: Client,
}

impl std::fmt::Debug for HyperwalletClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperwalletClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish()
    }
}

impl HyperwalletClient {
    /// Create a new client from a validated config
    pub fn new(config: &HyperwalletConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HyperwalletError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            client,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HyperwalletClient {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryPairs>,
        body: String,
    ) -> Result<Vec<u8>> {
        let url = self.url_for(path);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .basic_auth(&self.username, Some(&self.password));

        if let Some(query) = query {
            if !query.is_empty() {
                request = request.query(query);
            }
        }

        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let response_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            tracing::error!("{} {} failed with status: {}", method, url, status);
            return Err(HyperwalletError::api(status.as_u16(), response_body));
        }

        let bytes = response.bytes().await?;
        tracing::debug!("{} {} returned {} bytes", method, url, bytes.len());
        Ok(bytes.to_vec())
    }
}
