use sha2::{Digest, Sha256};

use super::domain::{Receipt, ReceiptDigest};

// Field and item separators keep adjacent fields from colliding
// (e.g. retailer "ab" + date vs retailer "a" + "b...").
const FIELD_SEP: [u8; 1] = [0x1f];
const ITEM_SEP: [u8; 1] = [0x1e];

/// Deterministic fingerprint over a validated receipt's content.
///
/// Hashes the typed fields in a fixed order, so semantically identical
/// submissions digest identically regardless of JSON key order. Items are
/// ordered content: reordering them is a different receipt.
pub fn content_digest(receipt: &Receipt) -> ReceiptDigest {
    let mut hasher = Sha256::new();

    hasher.update(receipt.retailer.as_bytes());
    hasher.update(FIELD_SEP);
    hasher.update(receipt.purchase_date.format("%Y-%m-%d").to_string().as_bytes());
    hasher.update(FIELD_SEP);
    hasher.update(receipt.purchase_time.format("%H:%M").to_string().as_bytes());
    hasher.update(FIELD_SEP);
    hasher.update(receipt.total.0.to_le_bytes());

    for item in &receipt.items {
        hasher.update(ITEM_SEP);
        hasher.update(item.short_description.as_bytes());
        hasher.update(FIELD_SEP);
        hasher.update(item.price.0.to_le_bytes());
    }

    ReceiptDigest(hex::encode(hasher.finalize()))
}
