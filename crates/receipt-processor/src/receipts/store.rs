use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use super::domain::{ReceiptDigest, ReceiptId};

/// Outcome of an atomic digest insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The digest was new; a fresh id now maps to the supplied score.
    Created(ReceiptId),
    /// The digest was already recorded; the stored score is untouched.
    Existing(ReceiptId),
}

/// Errors raised by score storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no receipt found for that id")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ReceiptStore: Send + Sync {
    /// Fast-path duplicate check; never mutates.
    fn find_by_digest(&self, digest: &ReceiptDigest) -> Result<Option<ReceiptId>, StoreError>;

    /// Atomic get-or-insert keyed by digest. A raced duplicate returns the
    /// winner's id and never overwrites the stored score.
    fn insert(&self, digest: ReceiptDigest, score: u64) -> Result<InsertOutcome, StoreError>;

    /// Score lookup; `NotFound` is distinct from a stored score of zero.
    fn points(&self, id: &ReceiptId) -> Result<u64, StoreError>;
}

#[derive(Debug, Default)]
struct StoreMaps {
    ids_by_digest: HashMap<ReceiptDigest, ReceiptId>,
    scores_by_id: HashMap<ReceiptId, u64>,
}

/// Process-lifetime store. Both maps sit behind one lock so an id is never
/// observable without its score. Entries accumulate for the life of the
/// process; eviction and persistence are out of scope.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    maps: Mutex<StoreMaps>,
}

impl ReceiptStore for InMemoryReceiptStore {
    fn find_by_digest(&self, digest: &ReceiptDigest) -> Result<Option<ReceiptId>, StoreError> {
        let guard = self.maps.lock().expect("store mutex poisoned");
        Ok(guard.ids_by_digest.get(digest).cloned())
    }

    fn insert(&self, digest: ReceiptDigest, score: u64) -> Result<InsertOutcome, StoreError> {
        let mut guard = self.maps.lock().expect("store mutex poisoned");
        if let Some(existing) = guard.ids_by_digest.get(&digest) {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }

        let id = ReceiptId(Uuid::new_v4().to_string());
        guard.ids_by_digest.insert(digest, id.clone());
        guard.scores_by_id.insert(id.clone(), score);
        Ok(InsertOutcome::Created(id))
    }

    fn points(&self, id: &ReceiptId) -> Result<u64, StoreError> {
        let guard = self.maps.lock().expect("store mutex poisoned");
        guard.scores_by_id.get(id).copied().ok_or(StoreError::NotFound)
    }
}
