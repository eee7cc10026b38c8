//! Concurrent invocations through one shared client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;
use shopify_admin_tools::shopify::{HttpResponse, TransportError};
use shopify_admin_tools::{Catalog, InvokeError, ToolExecutor};
use shopify_tools_core::CallArguments;
use shopify_tools_integration_tests::{
    EchoTransport, FailingTransport, RecordingTransport, TEST_API_VERSION, test_client,
};

fn catalog() -> Catalog {
    Catalog::shopify().expect("catalog is valid")
}

#[tokio::test]
async fn test_overlapping_calls_get_their_own_responses() {
    let slow = HttpResponse::new(StatusCode::OK, json!({"order": {"id": 1}}).to_string());
    let fast = HttpResponse::new(StatusCode::OK, json!({"order": {"id": 2}}).to_string());
    let transport = RecordingTransport::ok_json(&json!({}))
        .route_delayed("/admin/api/2025-01/orders/1.json", slow, Duration::from_millis(80))
        .route_delayed("/admin/api/2025-01/orders/2.json", fast, Duration::from_millis(5));

    let client = test_client(transport);
    let catalog = catalog();
    let get_order = catalog.get("get_order").expect("get_order");

    let first = CallArguments::new()
        .with("api_version", TEST_API_VERSION)
        .with("order_id", 1);
    let second = CallArguments::new()
        .with("api_version", TEST_API_VERSION)
        .with("order_id", 2);

    let (first, second) = tokio::join!(
        client.invoke(get_order, &first),
        client.invoke(get_order, &second)
    );

    assert_eq!(first.expect("first").body["order"]["id"], 1);
    assert_eq!(second.expect("second").body["order"]["id"], 2);
    assert_eq!(client.transport().call_count(), 2);
}

#[tokio::test]
async fn test_failing_call_does_not_affect_its_neighbour() {
    let slow = HttpResponse::new(StatusCode::OK, json!({"order": {"id": 1}}).to_string());
    let failed = HttpResponse::new(StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable");
    let transport = RecordingTransport::ok_json(&json!({}))
        .route_delayed("/admin/api/2025-01/orders/1.json", slow, Duration::from_millis(80))
        .route("/admin/api/2025-01/orders/2.json", failed);

    let client = test_client(transport);
    let catalog = catalog();
    let get_order = catalog.get("get_order").expect("get_order");

    let first = CallArguments::new()
        .with("api_version", TEST_API_VERSION)
        .with("order_id", 1);
    let second = CallArguments::new()
        .with("api_version", TEST_API_VERSION)
        .with("order_id", 2);

    let (first, second) = tokio::join!(
        client.invoke(get_order, &first),
        client.invoke(get_order, &second)
    );

    let first = first.expect("slow call succeeds");
    assert_eq!(first.status, 200);
    assert_eq!(first.body, json!({"order": {"id": 1}}));
    assert!(matches!(
        second,
        Err(InvokeError::Remote { status: 503, ref body }) if body == "upstream unavailable"
    ));
}

#[tokio::test]
async fn test_transport_failure_is_isolated_per_client() {
    let healthy = test_client(
        RecordingTransport::new(HttpResponse::new(StatusCode::OK, r#"{"shop":{"id":1}}"#))
            .route_delayed(
                "/admin/api/2025-01/shop.json",
                HttpResponse::new(StatusCode::OK, r#"{"shop":{"id":1}}"#),
                Duration::from_millis(30),
            ),
    );
    let broken = test_client(FailingTransport(TransportError::Timeout(
        "request timed out".to_string(),
    )));
    let catalog = catalog();
    let get_shop = catalog.get("get_shop").expect("get_shop");
    let args = CallArguments::new().with("api_version", TEST_API_VERSION);

    let (ok, failed) = tokio::join!(healthy.invoke(get_shop, &args), broken.invoke(get_shop, &args));

    assert_eq!(ok.expect("healthy client").body["shop"]["id"], 1);
    assert!(matches!(
        failed,
        Err(InvokeError::Transport(TransportError::Timeout(_)))
    ));
}

#[tokio::test]
async fn test_spawned_calls_share_one_client() {
    let client = test_client(EchoTransport {
        delay: Duration::from_millis(10),
    });
    let catalog = Arc::new(catalog());

    let handles: Vec<_> = (1..=16)
        .map(|id| {
            let client = client.clone();
            let catalog = Arc::clone(&catalog);
            tokio::spawn(async move {
                let descriptor = catalog.get("get_product").expect("get_product");
                let args = CallArguments::new()
                    .with("api_version", TEST_API_VERSION)
                    .with("product_id", id);
                (id, client.invoke(descriptor, &args).await)
            })
        })
        .collect();

    for handle in handles {
        let (id, result) = handle.await.expect("task completes");
        let response = result.expect("invoke");
        assert_eq!(
            response.body["path"],
            format!("/admin/api/{TEST_API_VERSION}/products/{id}.json")
        );
        assert_eq!(response.body["method"], "GET");
    }
}

#[tokio::test]
async fn test_executor_is_shared_across_tasks() {
    let client = test_client(EchoTransport::default());
    let executor = Arc::new(
        ToolExecutor::new(client, Arc::new(catalog()))
            .with_default_argument("api_version", TEST_API_VERSION),
    );

    let customers = {
        let executor = Arc::clone(&executor);
        tokio::spawn(async move {
            executor
                .execute("list_customers", &json!({"limit": 3}))
                .await
        })
    };
    let shop = {
        let executor = Arc::clone(&executor);
        tokio::spawn(async move { executor.execute("get_shop", &json!({})).await })
    };

    let customers = customers.await.expect("task").expect("list_customers");
    let shop = shop.await.expect("task").expect("get_shop");

    assert_eq!(customers.data["path"], "/admin/api/2025-01/customers.json");
    assert_eq!(customers.data["query"], "limit=3");
    assert_eq!(shop.data["path"], "/admin/api/2025-01/shop.json");
    assert!(shop.data["query"].is_null());
}
