use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{ReceiptId, ReceiptSubmission};
use super::service::{ReceiptService, ReceiptServiceError};
use super::store::{ReceiptStore, StoreError};

/// Router exposing receipt submission and score lookup.
pub fn receipt_router<S>(service: Arc<ReceiptService<S>>) -> Router
where
    S: ReceiptStore + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<S>))
        .route("/receipts/:receipt_id/points", get(points_handler::<S>))
        .with_state(service)
}

pub(crate) async fn process_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    axum::Json(submission): axum::Json<ReceiptSubmission>,
) -> Response
where
    S: ReceiptStore + 'static,
{
    match service.process(&submission) {
        Ok(id) => (StatusCode::OK, axum::Json(json!({ "id": id.0 }))).into_response(),
        Err(ReceiptServiceError::Validation(error)) => {
            let payload = json!({
                "detail": "The receipt is invalid.",
                "errors": error.errors,
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn points_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    S: ReceiptStore + 'static,
{
    let id = ReceiptId(receipt_id);
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, axum::Json(json!({ "points": points }))).into_response(),
        Err(ReceiptServiceError::Store(StoreError::NotFound)) => {
            let payload = json!({
                "detail": "No receipt found for that ID.",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
