use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned once per distinct receipt content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

/// Lowercase hex SHA-256 fingerprint over a validated receipt's fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptDigest(pub String);

/// Exact fixed-point currency amount in cents.
///
/// Prices and totals arrive as two-decimal strings; validation parses them
/// into cents exactly once so the scoring rules never touch binary floating
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cents(pub u64);

impl Cents {
    /// Whole-dollar amount with no cents, e.g. `10.00`.
    pub fn is_round_dollar(self) -> bool {
        self.0 % 100 == 0
    }

    /// Exact multiple of 0.25.
    pub fn is_quarter_multiple(self) -> bool {
        self.0 % 25 == 0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Raw wire shape accepted by `POST /receipts/process`.
///
/// Every field defaults so a missing field surfaces as a validation error with
/// a field path rather than a bare deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    #[serde(default)]
    pub retailer: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub purchase_time: String,
    #[serde(default)]
    pub items: Vec<ItemSubmission>,
    #[serde(default)]
    pub total: String,
}

/// Raw line item as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSubmission {
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub price: String,
}

/// Fully validated receipt, the only input the scoring rules accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Cents,
}

/// Validated line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    pub price: Cents,
}
