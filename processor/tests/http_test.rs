//! HTTP-level tests for the trigger surface
//!
//! Drives the router directly with `tower::ServiceExt::oneshot` and a mocked
//! store, verifying the terminal status/body mapping of the workflow.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use processor::{web, LicenseProcessor, MockMetafieldStore, RetryPolicy};

fn app_with(store: MockMetafieldStore) -> axum::Router {
    web::build_router(Arc::new(LicenseProcessor::new(store, RetryPolicy::default())))
}

async fn post_process(app: axum::Router, body: serde_json::Value) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/process-license")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn licenses_metafield(value: serde_json::Value) -> shared::Metafield {
    shared::Metafield {
        namespace: "xchange".to_string(),
        key: "licenses".to_string(),
        value,
        field_type: Some("json".to_string()),
    }
}

#[tokio::test]
async fn missing_order_id_rejected_before_any_remote_call() {
    let mut store = MockMetafieldStore::new();
    store.expect_fetch_order_metafields().times(0);
    store.expect_create_order_metafield().times(0);

    let (status, body) = post_process(app_with(store), json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing order_id");
}

#[tokio::test]
async fn empty_order_id_rejected_before_any_remote_call() {
    let mut store = MockMetafieldStore::new();
    store.expect_fetch_order_metafields().times(0);
    store.expect_create_order_metafield().times(0);

    let (status, body) = post_process(app_with(store), json!({"order_id": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing order_id");
}

#[tokio::test]
async fn successful_run_reports_plain_text_ok() {
    let mut store = MockMetafieldStore::new();
    store.expect_fetch_order_metafields().times(1).returning(|_| {
        Ok(vec![licenses_metafield(json!(
            r#"[{"product": "A", "serial": "123"}]"#
        ))])
    });
    store
        .expect_create_order_metafield()
        .times(1)
        .returning(|_| Ok(()));

    let (status, body) = post_process(app_with(store), json!({"order_id": "1001"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "HTML saved successfully.");
}

#[tokio::test(start_paused = true)]
async fn exhausted_poll_maps_to_not_found() {
    let mut store = MockMetafieldStore::new();
    store
        .expect_fetch_order_metafields()
        .times(6)
        .returning(|_| Ok(vec![]));
    store.expect_create_order_metafield().times(0);

    let (status, body) = post_process(app_with(store), json!({"order_id": "1001"})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "License metafield not found after retries.");
}

#[tokio::test]
async fn upstream_fetch_status_passes_through() {
    let mut store = MockMetafieldStore::new();
    store
        .expect_fetch_order_metafields()
        .times(1)
        .returning(|_| Err(shared::StoreFailure::Http { status: 403 }));
    store.expect_create_order_metafield().times(0);

    let (status, body) = post_process(app_with(store), json!({"order_id": "1001"})).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, "Error fetching metafields from Shopify");
}

#[tokio::test]
async fn write_failure_maps_to_server_error() {
    let mut store = MockMetafieldStore::new();
    store
        .expect_fetch_order_metafields()
        .times(1)
        .returning(|_| Ok(vec![licenses_metafield(json!("[]"))]));
    store
        .expect_create_order_metafield()
        .times(1)
        .returning(|_| Err(shared::StoreFailure::Http { status: 500 }));

    let (status, body) = post_process(app_with(store), json!({"order_id": "1001"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Failed to save HTML to licenses_html metafield");
}

#[tokio::test]
async fn panicking_workflow_maps_to_generic_server_error() {
    struct PanickingStore;

    #[async_trait::async_trait]
    impl processor::MetafieldStore for PanickingStore {
        async fn fetch_order_metafields(
            &self,
            _order_id: &str,
        ) -> Result<Vec<shared::Metafield>, shared::StoreFailure> {
            panic!("store exploded")
        }

        async fn create_order_metafield(
            &self,
            _metafield: shared::NewMetafield,
        ) -> Result<(), shared::StoreFailure> {
            unreachable!()
        }
    }

    let app = web::build_router(Arc::new(LicenseProcessor::new(
        PanickingStore,
        RetryPolicy::default(),
    )));

    let (status, body) = post_process(app, json!({"order_id": "1001"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Unexpected server error");
}

#[tokio::test]
async fn health_check_reports_ok() {
    let mut store = MockMetafieldStore::new();
    store.expect_fetch_order_metafields().times(0);
    store.expect_create_order_metafield().times(0);

    let response = app_with(store)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(payload["status"], "ok");
}
