//! Receipt intake, points scoring, and score lookup.
//!
//! The pipeline is strictly bottom-up: `validate` turns a raw submission into
//! a typed [`Receipt`] or a structured list of field errors, `scoring` is a
//! pure function over validated receipts, `digest` fingerprints receipt
//! content for deduplication, and `store` keeps the digest/id/score maps
//! behind a single lock. `service` composes the pieces and `router` exposes
//! them over HTTP.

pub mod digest;
pub mod domain;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;
pub mod validate;

#[cfg(test)]
mod tests;

pub use digest::content_digest;
pub use domain::{Cents, Item, ItemSubmission, Receipt, ReceiptDigest, ReceiptId, ReceiptSubmission};
pub use router::receipt_router;
pub use scoring::{breakdown, score, RuleContribution, ScoreBreakdown, ScoringRule};
pub use service::{ReceiptService, ReceiptServiceError};
pub use store::{InMemoryReceiptStore, InsertOutcome, ReceiptStore, StoreError};
pub use validate::{validate, FieldError, ValidationError};
