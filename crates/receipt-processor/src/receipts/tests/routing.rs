use super::common::*;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use crate::receipts::router::{points_handler, process_handler};
use crate::receipts::service::ReceiptService;
use crate::receipts::store::InMemoryReceiptStore;

#[tokio::test]
async fn process_route_returns_id() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/receipts/process")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&target_submission()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let id = payload.get("id").and_then(Value::as_str).expect("id field");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn points_route_returns_stored_score() {
    let (service, _) = build_service();
    let id = service
        .process(&target_submission())
        .expect("submission processes");
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get(format!("/receipts/{}/points", id.0))
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("points").and_then(Value::as_u64), Some(28));
}

#[tokio::test]
async fn process_handler_rejects_invalid_receipt() {
    let (service, _) = build_service();

    let mut bad = target_submission();
    bad.purchase_date = "05/01/2022".to_string();

    let response = process_handler::<InMemoryReceiptStore>(State(service), axum::Json(bad)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("detail").and_then(Value::as_str),
        Some("The receipt is invalid.")
    );
    let errors = payload
        .get("errors")
        .and_then(Value::as_array)
        .expect("errors array");
    assert_eq!(
        errors[0].get("loc").and_then(Value::as_str),
        Some("purchaseDate")
    );
}

#[tokio::test]
async fn points_handler_returns_404_for_unknown_id() {
    let (service, _) = build_service();

    let response = points_handler::<InMemoryReceiptStore>(
        State(service),
        Path("7fb1377b-b223-49d9-a31a-5a02701dd310".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("detail").and_then(Value::as_str),
        Some("No receipt found for that ID.")
    );
}

#[tokio::test]
async fn store_failure_maps_to_internal_error() {
    let service = Arc::new(ReceiptService::new(Arc::new(UnavailableStore)));

    let response =
        process_handler::<UnavailableStore>(State(service), axum::Json(target_submission())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn resubmission_over_http_returns_the_same_id() {
    let (service, _) = build_service();

    let first =
        process_handler::<InMemoryReceiptStore>(State(service.clone()), axum::Json(target_submission()))
            .await;
    let second =
        process_handler::<InMemoryReceiptStore>(State(service), axum::Json(target_submission()))
            .await;

    let first = read_json_body(first).await;
    let second = read_json_body(second).await;
    assert_eq!(first.get("id"), second.get("id"));
}
