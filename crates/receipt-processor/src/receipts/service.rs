use std::sync::Arc;

use tracing::{debug, info};

use super::digest::content_digest;
use super::domain::{ReceiptId, ReceiptSubmission};
use super::scoring;
use super::store::{InsertOutcome, ReceiptStore, StoreError};
use super::validate::{validate, ValidationError};

/// Service composing the validator, scoring engine, and receipt store.
pub struct ReceiptService<S> {
    store: Arc<S>,
}

impl<S> ReceiptService<S>
where
    S: ReceiptStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate, score, and record a submission, returning its identifier.
    ///
    /// Resubmitting identical content returns the original id without
    /// rescoring; the stored score is written once and never overwritten.
    /// Validation failure short-circuits before any store mutation.
    pub fn process(
        &self,
        submission: &ReceiptSubmission,
    ) -> Result<ReceiptId, ReceiptServiceError> {
        let receipt = validate(submission)?;
        let digest = content_digest(&receipt);

        if let Some(id) = self.store.find_by_digest(&digest)? {
            debug!(id = %id.0, "duplicate receipt content, returning existing id");
            return Ok(id);
        }

        let score = scoring::score(&receipt);
        match self.store.insert(digest, score)? {
            InsertOutcome::Created(id) => {
                info!(id = %id.0, score, "receipt scored");
                Ok(id)
            }
            // Lost a race against an identical concurrent submission; the
            // winner's id and score stand.
            InsertOutcome::Existing(id) => Ok(id),
        }
    }

    /// Look up the score recorded for an id.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        Ok(self.store.points(id)?)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
