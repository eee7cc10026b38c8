//! HTTP transport seam.
//!
//! The invoker talks to Shopify only through [`Transport`], so tests can
//! substitute an in-memory fake. [`ReqwestTransport`] is the production
//! implementation: one pooled `reqwest::Client` with the access token fixed
//! in its default headers at construction.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use shopify_tools_core::HttpMethod;
use thiserror::Error;
use url::Url;

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";

/// Network-level failures. No response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection could not be established (refused, DNS, TLS).
    #[error("connection failed: {0}")]
    Connect(String),

    /// The configured timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Any other failure, including reading the response body.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else {
            Self::Other(err.to_string())
        }
    }
}

/// A fully resolved outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    /// JSON payload; `None` sends no body at all.
    pub body: Option<Value>,
}

/// A raw response, before decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Response with no headers.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Builder-style header insert. Invalid names or values are skipped.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }
}

/// Sends one HTTP request and returns the raw response.
///
/// Implementations must not retry and must not hold per-call state between
/// requests.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Pooled `reqwest` transport with the access token attached to every request.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    /// Build the pooled client.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Other` if the token is not a valid header
    /// value or the client cannot be built.
    pub fn new(access_token: &SecretString, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut token = HeaderValue::from_str(access_token.expose_secret())
            .map_err(|_| TransportError::Other("access token is not a valid header value".to_string()))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(ACCESS_TOKEN_HEADER), token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
