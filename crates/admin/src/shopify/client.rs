//! The generic endpoint invoker.

use std::sync::Arc;

use serde_json::Value;
use shopify_tools_core::{CallArguments, EndpointDescriptor, RequestPlan, plan};
use tracing::{debug, instrument};
use url::Url;

use crate::config::{ConfigError, ShopifyConfig};

use super::InvokeError;
use super::response::ApiResponse;
use super::transport::{HttpRequest, ReqwestTransport, Transport};

/// Shopify Admin REST client.
///
/// Cheap to clone; clones share one transport. Holds no per-call state, so
/// concurrent invocations are independent.
///
/// # Security
///
/// The production transport carries the HIGH PRIVILEGE access token.
pub struct ShopifyClient<T = ReqwestTransport> {
    inner: Arc<ShopifyClientInner<T>>,
}

struct ShopifyClientInner<T> {
    base_url: Url,
    transport: T,
}

impl<T> Clone for ShopifyClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for ShopifyClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ShopifyClient<ReqwestTransport> {
    /// Create a client backed by a pooled `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is invalid or the access token
    /// cannot be used as a header value.
    pub fn from_config(config: &ShopifyConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(&config.api_key, config.request_timeout)
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPIFY_API_KEY".to_string(), e.to_string()))?;
        Ok(Self::with_transport(config.base_url()?, transport))
    }
}

impl<T: Transport> ShopifyClient<T> {
    /// Create a client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(base_url: Url, transport: T) -> Self {
        Self {
            inner: Arc::new(ShopifyClientInner {
                base_url,
                transport,
            }),
        }
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Invoke one endpoint.
    ///
    /// Resolves the path, partitions the arguments into query string and JSON
    /// body, checks required parameters, and then sends exactly one request.
    /// No request is sent when any of the pre-flight checks fails.
    ///
    /// # Errors
    ///
    /// - `InvokeError::MissingParameter`, `InvalidParameter`,
    ///   `UnknownParameter` before any network call
    /// - `InvokeError::Transport` if no response arrived
    /// - `InvokeError::Remote` for a non-2xx response
    /// - `InvokeError::Decode` for a 2xx body that is not JSON
    #[instrument(
        skip(self, descriptor, args),
        fields(tool = %descriptor.name(), method = %descriptor.method())
    )]
    pub async fn invoke(
        &self,
        descriptor: &EndpointDescriptor,
        args: &CallArguments,
    ) -> Result<ApiResponse, InvokeError> {
        let planned = plan(descriptor, args)?;
        if !planned.ignored().is_empty() {
            debug!(ignored = ?planned.ignored(), "Dropping undeclared arguments");
        }

        let url = self.resolve(&planned);
        debug!(path = %url.path(), query_params = planned.query().len(), "Sending Shopify request");

        let request = HttpRequest {
            method: planned.method(),
            url,
            body: planned.into_body().map(Value::Object),
        };
        let response = self.inner.transport.send(request).await?;

        ApiResponse::from_http(response)
    }

    /// Join the planned path and query onto the base URL.
    fn resolve(&self, planned: &RequestPlan) -> Url {
        let mut url = self.inner.base_url.clone();
        let path = format!("{}{}", url.path().trim_end_matches('/'), planned.path());
        url.set_path(&path);
        url.set_query(None);
        if !planned.query().is_empty() {
            url.query_pairs_mut().extend_pairs(planned.query());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use reqwest::StatusCode;
    use serde_json::json;
    use shopify_tools_core::{HttpMethod, ParamKind};

    use super::*;
    use crate::shopify::{HttpResponse, TransportError};

    struct FakeTransport {
        requests: Mutex<Vec<HttpRequest>>,
        status: StatusCode,
        body: &'static str,
    }

    impl FakeTransport {
        fn new(status: StatusCode, body: &'static str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                status,
                body,
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().expect("lock").clone()
        }
    }

    impl Transport for FakeTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().expect("lock").push(request);
            Ok(HttpResponse::new(self.status, self.body))
        }
    }

    fn client(base: &str, transport: FakeTransport) -> ShopifyClient<FakeTransport> {
        ShopifyClient::with_transport(Url::parse(base).expect("url"), transport)
    }

    fn list_orders() -> EndpointDescriptor {
        EndpointDescriptor::builder(
            "list_orders",
            HttpMethod::Get,
            "/admin/api/{api_version}/orders.json",
        )
        .path("api_version", "Admin API version")
        .query("status", ParamKind::String, "Status filter")
        .query("ids", ParamKind::Array, "Order IDs")
        .build()
        .expect("valid descriptor")
    }

    fn create_order() -> EndpointDescriptor {
        EndpointDescriptor::builder(
            "create_order",
            HttpMethod::Post,
            "/admin/api/{api_version}/orders.json",
        )
        .path("api_version", "Admin API version")
        .required_body("order", ParamKind::Object, "Order payload")
        .build()
        .expect("valid descriptor")
    }

    #[test]
    fn test_client_is_send_sync_clone() {
        fn assert_traits<C: Send + Sync + Clone>() {}
        assert_traits::<ShopifyClient>();
        assert_traits::<ShopifyClient<FakeTransport>>();
    }

    #[tokio::test]
    async fn test_invoke_builds_url_and_query() {
        let client = client(
            "https://test-store.myshopify.com",
            FakeTransport::new(StatusCode::OK, r#"{"orders":[]}"#),
        );
        let args = CallArguments::new()
            .with("api_version", "2025-01")
            .with("status", "open")
            .with("ids", json!([1, 2]));

        let response = client.invoke(&list_orders(), &args).await.expect("invoke");
        assert_eq!(response.body, json!({"orders": []}));

        let requests = client.inner.transport.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.path(), "/admin/api/2025-01/orders.json");
        let query: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
        assert!(query.contains(&("status".to_string(), "open".to_string())));
        assert!(query.contains(&("ids".to_string(), "1,2".to_string())));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_invoke_preserves_base_path_and_omits_empty_query() {
        let client = client(
            "http://127.0.0.1:9000/proxy/",
            FakeTransport::new(StatusCode::OK, "{}"),
        );
        let args = CallArguments::new().with("api_version", "2025-01");
        client.invoke(&list_orders(), &args).await.expect("invoke");

        let request = &client.inner.transport.requests()[0];
        assert_eq!(
            request.url.as_str(),
            "http://127.0.0.1:9000/proxy/admin/api/2025-01/orders.json"
        );
    }

    #[tokio::test]
    async fn test_invoke_sends_json_body() {
        let client = client(
            "https://test-store.myshopify.com",
            FakeTransport::new(StatusCode::CREATED, r#"{"order":{"id":1}}"#),
        );
        let args = CallArguments::new()
            .with("api_version", "2025-01")
            .with("order", json!({"line_items": []}));

        let response = client.invoke(&create_order(), &args).await.expect("invoke");
        assert_eq!(response.status, 201);

        let request = &client.inner.transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({"order": {"line_items": []}})));
        assert!(request.url.query().is_none());
    }

    #[tokio::test]
    async fn test_pre_flight_failure_sends_nothing() {
        let client = client(
            "https://test-store.myshopify.com",
            FakeTransport::new(StatusCode::OK, "{}"),
        );
        let args = CallArguments::new().with("api_version", "2025-01");

        let err = client
            .invoke(&create_order(), &args)
            .await
            .expect_err("order is required");
        assert!(matches!(err, InvokeError::MissingParameter(ref n) if n == "order"));
        assert!(client.inner.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_remote_error_passes_through() {
        let client = client(
            "https://test-store.myshopify.com",
            FakeTransport::new(StatusCode::UNPROCESSABLE_ENTITY, r#"{"errors":{"order":["invalid"]}}"#),
        );
        let args = CallArguments::new()
            .with("api_version", "2025-01")
            .with("order", json!({}));

        let err = client.invoke(&create_order(), &args).await.expect_err("422");
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.body_json(), Some(json!({"errors": {"order": ["invalid"]}})));
    }
}
