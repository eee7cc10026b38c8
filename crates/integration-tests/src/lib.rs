//! Integration tests for the Shopify Admin REST tools.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopify-tools-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `invoker_http` - End-to-end invocations against a local `mockito` server
//! - `missing_parameters` - Pre-flight checks across the whole catalog
//! - `concurrency` - Independent concurrent invocations
//! - `catalog_tools` - Catalog and tool definition checks
//!
//! This library holds the shared fixtures: in-memory [`Transport`] fakes and
//! argument builders.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{Value, json};
use shopify_admin_tools::ShopifyClient;
use shopify_admin_tools::shopify::{HttpRequest, HttpResponse, Transport, TransportError};
use shopify_tools_core::{CallArguments, EndpointDescriptor, ParamKind, ParamLocation, ParamSpec};
use url::Url;

/// Base URL used by clients over in-memory transports.
pub const TEST_BASE_URL: &str = "https://test-store.myshopify.com";

/// API version used in sample arguments.
pub const TEST_API_VERSION: &str = "2025-01";

struct Route {
    path: String,
    response: HttpResponse,
    delay: Duration,
}

/// Transport fake that records every request and answers from a script.
///
/// Requests are matched by exact URL path; unmatched requests get the
/// fallback response.
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    routes: Vec<Route>,
    fallback: HttpResponse,
}

impl RecordingTransport {
    #[must_use]
    pub fn new(fallback: HttpResponse) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            routes: Vec::new(),
            fallback,
        }
    }

    /// Answer every request with `200 OK` and `body`.
    #[must_use]
    pub fn ok_json(body: &Value) -> Self {
        Self::new(HttpResponse::new(StatusCode::OK, body.to_string()))
    }

    /// Answer requests for `path` with `response`.
    #[must_use]
    pub fn route(self, path: &str, response: HttpResponse) -> Self {
        self.route_delayed(path, response, Duration::ZERO)
    }

    /// Answer requests for `path` with `response` after `delay`.
    #[must_use]
    pub fn route_delayed(mut self, path: &str, response: HttpResponse, delay: Duration) -> Self {
        self.routes.push(Route {
            path: path.to_string(),
            response,
            delay,
        });
        self
    }

    /// All requests received so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let (response, delay) = self
            .routes
            .iter()
            .find(|route| route.path == request.url.path())
            .map_or((self.fallback.clone(), Duration::ZERO), |route| {
                (route.response.clone(), route.delay)
            });

        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(response)
    }
}

/// Transport fake that answers `200 OK` with the request it received:
/// `{"method", "path", "query", "body"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoTransport {
    /// Delay before answering.
    pub delay: Duration,
}

impl Transport for EchoTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let echo = json!({
            "method": request.method,
            "path": request.url.path(),
            "query": request.url.query(),
            "body": request.body,
        });
        Ok(HttpResponse::new(StatusCode::OK, echo.to_string()))
    }
}

/// Transport fake that always fails before a response arrives.
#[derive(Debug, Clone)]
pub struct FailingTransport(pub TransportError);

impl Transport for FailingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(self.0.clone())
    }
}

/// Client over an in-memory transport, rooted at [`TEST_BASE_URL`].
///
/// # Panics
///
/// Panics if [`TEST_BASE_URL`] does not parse.
#[must_use]
pub fn test_client<T: Transport>(transport: T) -> ShopifyClient<T> {
    let base_url = Url::parse(TEST_BASE_URL).expect("TEST_BASE_URL is a valid URL");
    ShopifyClient::with_transport(base_url, transport)
}

/// A plausible value for `spec`, by location and kind.
#[must_use]
pub fn sample_value(spec: &ParamSpec) -> Value {
    if spec.name() == "api_version" {
        return json!(TEST_API_VERSION);
    }
    match (spec.location(), spec.kind()) {
        (ParamLocation::Path, _) | (_, ParamKind::String) => json!("1001"),
        (_, ParamKind::Integer) => json!(1001),
        (_, ParamKind::Number) => json!(10.5),
        (_, ParamKind::Boolean) => json!(true),
        (_, ParamKind::Object) => json!({"note": "integration"}),
        (_, ParamKind::Array) => json!([1001, 1002]),
    }
}

/// Arguments for every required parameter of `descriptor`.
#[must_use]
pub fn required_arguments(descriptor: &EndpointDescriptor) -> CallArguments {
    descriptor
        .params()
        .iter()
        .filter(|spec| spec.is_required())
        .map(|spec| (spec.name(), sample_value(spec)))
        .collect()
}

/// Arguments for every declared parameter of `descriptor`.
#[must_use]
pub fn all_arguments(descriptor: &EndpointDescriptor) -> CallArguments {
    descriptor
        .params()
        .iter()
        .map(|spec| (spec.name(), sample_value(spec)))
        .collect()
}
