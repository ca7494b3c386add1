use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, ItemSubmission, Receipt, ReceiptSubmission};
use crate::receipts::service::ReceiptService;
use crate::receipts::store::{
    InMemoryReceiptStore, InsertOutcome, ReceiptStore, StoreError,
};
use crate::receipts::validate::validate;
use crate::receipts::{receipt_router, ReceiptDigest, ReceiptId};

pub(super) fn item(short_description: &str, price: &str) -> ItemSubmission {
    ItemSubmission {
        short_description: short_description.to_string(),
        price: price.to_string(),
    }
}

pub(super) fn submission(
    retailer: &str,
    purchase_date: &str,
    purchase_time: &str,
    total: &str,
    items: Vec<ItemSubmission>,
) -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: retailer.to_string(),
        purchase_date: purchase_date.to_string(),
        purchase_time: purchase_time.to_string(),
        items,
        total: total.to_string(),
    }
}

/// The worked reference receipt, worth exactly 28 points.
pub(super) fn target_submission() -> ReceiptSubmission {
    submission(
        "Target",
        "2022-01-01",
        "13:01",
        "35.35",
        vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    )
}

/// A receipt every rule scores zero on: no alphanumerics in the retailer,
/// a total that is neither round nor a quarter multiple, a single item with
/// an off-length description, an even day, and a morning purchase.
pub(super) fn zero_point_submission() -> ReceiptSubmission {
    submission(
        "&",
        "2023-01-02",
        "09:15",
        "10.10",
        vec![item("ab", "1.07")],
    )
}

pub(super) fn validated(submission: &ReceiptSubmission) -> Receipt {
    validate(submission).expect("submission validates")
}

pub(super) fn validated_item(short_description: &str, price: &str) -> Item {
    let receipt = validated(&submission(
        "Shop",
        "2023-06-02",
        "09:00",
        "1.00",
        vec![item(short_description, price)],
    ));
    receipt.items.into_iter().next().expect("one item")
}

pub(super) fn build_service() -> (
    Arc<ReceiptService<InMemoryReceiptStore>>,
    Arc<InMemoryReceiptStore>,
) {
    let store = Arc::new(InMemoryReceiptStore::default());
    let service = Arc::new(ReceiptService::new(store.clone()));
    (service, store)
}

pub(super) fn router_with_service(
    service: Arc<ReceiptService<InMemoryReceiptStore>>,
) -> axum::Router {
    receipt_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Store stub whose every operation fails, for 500-path handler tests.
pub(super) struct UnavailableStore;

impl ReceiptStore for UnavailableStore {
    fn find_by_digest(&self, _digest: &ReceiptDigest) -> Result<Option<ReceiptId>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn insert(&self, _digest: ReceiptDigest, _score: u64) -> Result<InsertOutcome, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn points(&self, _id: &ReceiptId) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}
