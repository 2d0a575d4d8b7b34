//! HTTP transport seam between the session client and the provider.
//!
//! The client performs every operation as a single GET with URL-encoded
//! query parameters and consumes the raw body as text. [`Transport`] is the
//! boundary trait; [`HttpTransport`] is the reqwest-backed implementation
//! used by default. Tests substitute a scripted transport through the same
//! trait.
//!
//! # Error-status collapsing
//!
//! The provider signals conditions like invalid credentials through HTTP
//! error statuses with no usable body. [`HttpTransport`] therefore collapses
//! the whole 4xx/5xx class to an empty body instead of raising; the session
//! client interprets an empty body per operation (for login it means
//! "credentials rejected"). An error status is thus indistinguishable from a
//! legitimate empty 200 body at this layer - a known ambiguity in the
//! provider contract, carried over deliberately and not to be generalized to
//! other error classes. Connection-level failures still propagate, and a
//! non-200 status outside the error class is a [`Error::Protocol`].

use async_trait::async_trait;

use crate::error::{Error, Result};

/// A single stateless GET round-trip to the provider.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a GET against `url` with `params` URL-encoded into the
    /// query string, returning the raw response body as text.
    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<String>;
}

/// Transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a default reqwest client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport from a caller-configured reqwest client
    /// (custom timeouts, proxies, and so on).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<String> {
        let response = self.client.get(url).query(params).send().await?;
        let status = response.status();

        // Provider contract: HTTP error statuses carry no usable body and
        // collapse to an empty string for the client to interpret in-band.
        if status.is_client_error() || status.is_server_error() {
            tracing::debug!(%status, url, "error status collapsed to empty body");
            return Ok(String::new());
        }

        if status != reqwest::StatusCode::OK {
            return Err(Error::Protocol {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
