//! HTTP fetcher implementation
//!
//! This module handles the single HTTP request made per robots.txt check:
//! - Building the reqwest client from configuration (user agent, timeouts, redirects)
//! - GET requests bounded by a caller-supplied timeout
//! - Streaming the body up to a size cap
//! - Transport error classification
//!
//! No retries: one call, one attempt.

use crate::config::{ClientConfig, RedirectPolicy};
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Result of fetching a robots.txt file
///
/// Any HTTP response, whatever its status, is a `Response`; only failures to get
/// a response at all are `NetworkError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The server answered
    Response {
        /// HTTP status code
        status_code: u16,
        /// Response body (empty for bodies that were not read)
        body: String,
    },

    /// No usable response (DNS, connect, TLS, timeout, redirect limit, body read)
    NetworkError(TransportError),
}

/// Kind of transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Redirect,
    Body,
    Other,
}

/// A failure to obtain a response from the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            TransportErrorKind::Timeout
        } else if e.is_connect() {
            TransportErrorKind::Connect
        } else if e.is_redirect() {
            TransportErrorKind::Redirect
        } else if e.is_body() || e.is_decode() {
            TransportErrorKind::Body
        } else {
            TransportErrorKind::Other
        };
        Self::new(kind, e.to_string())
    }
}

/// HTTP capability used to retrieve robots.txt
///
/// Implementations own transport concerns (TLS, redirects, connection reuse).
/// They must not retry and must give up once `timeout` has elapsed, reporting
/// that as a [`TransportErrorKind::Timeout`] network error.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Sends a GET request
    async fn get(&self, url: &Url, timeout: Duration) -> FetchResult;
}

/// reqwest-backed [`HttpFetcher`]
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl ReqwestFetcher {
    /// Builds a fetcher from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
            max_body_bytes: config.max_body_bytes,
        })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &Url, timeout: Duration) -> FetchResult {
        let mut response = match self.client.get(url.clone()).timeout(timeout).send().await {
            Ok(response) => response,
            Err(e) => return FetchResult::NetworkError(e.into()),
        };

        let status_code = response.status().as_u16();

        // The body only matters for 2xx
        if !response.status().is_success() {
            return FetchResult::Response {
                status_code,
                body: String::new(),
            };
        }

        // Read until the cap is reached, then drop the connection
        let mut body = Vec::new();
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => {
                    if !append_capped(&mut body, &chunk, self.max_body_bytes) {
                        tracing::debug!(
                            "Stopped reading {} at the {} byte cap",
                            url,
                            self.max_body_bytes
                        );
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => return FetchResult::NetworkError(e.into()),
            }
        }

        FetchResult::Response {
            status_code,
            body: decode_body(&body),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use robots_checker::config::ClientConfig;
/// use robots_checker::fetch::build_http_client;
///
/// let client = build_http_client(&ClientConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    let redirect = match config.redirect_policy {
        RedirectPolicy::Follow => Policy::limited(config.max_redirects),
        RedirectPolicy::None => Policy::none(),
    };

    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .redirect(redirect)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Appends `chunk` to `body` without letting it grow past `max_bytes`
///
/// Returns false once the cap is reached and the rest of the body should be skipped.
fn append_capped(body: &mut Vec<u8>, chunk: &[u8], max_bytes: usize) -> bool {
    let take = chunk.len().min(max_bytes.saturating_sub(body.len()));
    body.extend_from_slice(&chunk[..take]);
    body.len() < max_bytes
}

/// Decodes a robots.txt body
///
/// Invalid UTF-8 is replaced rather than rejected; a cut through a multi-byte
/// character just yields a replacement character at the end.
fn decode_body(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
