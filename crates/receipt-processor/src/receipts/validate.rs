use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::domain::{Cents, Item, Receipt, ReceiptSubmission};

/// A single offending field: its path in the submission and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: String,
    pub message: String,
}

/// Raised when one or more receipt fields fail format or range checks.
///
/// Carries every offending field, not just the first, so a client can fix a
/// submission in one round trip.
#[derive(Debug, thiserror::Error)]
#[error("{} invalid field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

fn retailer_char_allowed(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '-' | '&')
}

fn description_char_allowed(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '-')
}

/// Parse a `^\d+\.\d{2}$` decimal string into exact cents.
fn parse_money(raw: &str) -> Option<Cents> {
    let (dollars, cents) = raw.split_once('.')?;
    if dollars.is_empty()
        || cents.len() != 2
        || !dollars.bytes().all(|b| b.is_ascii_digit())
        || !cents.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let dollars: u64 = dollars.parse().ok()?;
    let cents: u64 = cents.parse().ok()?;
    dollars.checked_mul(100)?.checked_add(cents).map(Cents)
}

/// Check every field of a submission, producing a typed [`Receipt`] or the
/// full list of field errors. Runs all checks; never short-circuits.
pub fn validate(submission: &ReceiptSubmission) -> Result<Receipt, ValidationError> {
    let mut errors = Vec::new();

    if submission.retailer.is_empty()
        || !submission.retailer.chars().all(retailer_char_allowed)
    {
        errors.push(FieldError {
            loc: "retailer".to_string(),
            message: "must be a non-empty mix of letters, digits, spaces, hyphens, underscores, and ampersands".to_string(),
        });
    }

    let purchase_date = NaiveDate::parse_from_str(&submission.purchase_date, DATE_FORMAT).ok();
    if purchase_date.is_none() {
        errors.push(FieldError {
            loc: "purchaseDate".to_string(),
            message: "must be a calendar date in YYYY-MM-DD format".to_string(),
        });
    }

    let purchase_time = NaiveTime::parse_from_str(&submission.purchase_time, TIME_FORMAT).ok();
    if purchase_time.is_none() {
        errors.push(FieldError {
            loc: "purchaseTime".to_string(),
            message: "must be a 24-hour time in HH:MM format".to_string(),
        });
    }

    let total = parse_money(&submission.total);
    if total.is_none() {
        errors.push(FieldError {
            loc: "total".to_string(),
            message: "must be a decimal amount with exactly two fraction digits, e.g. 6.49".to_string(),
        });
    }

    if submission.items.is_empty() {
        errors.push(FieldError {
            loc: "items".to_string(),
            message: "must contain at least one item".to_string(),
        });
    }

    let mut items = Vec::with_capacity(submission.items.len());
    for (index, item) in submission.items.iter().enumerate() {
        let description_ok = !item.short_description.is_empty()
            && item.short_description.chars().all(description_char_allowed);
        if !description_ok {
            errors.push(FieldError {
                loc: format!("items[{index}].shortDescription"),
                message: "must be a non-empty mix of letters, digits, spaces, hyphens, and underscores".to_string(),
            });
        }

        match parse_money(&item.price) {
            Some(price) if description_ok => items.push(Item {
                short_description: item.short_description.clone(),
                price,
            }),
            Some(_) => {}
            None => errors.push(FieldError {
                loc: format!("items[{index}].price"),
                message: "must be a decimal amount with exactly two fraction digits, e.g. 6.49".to_string(),
            }),
        }
    }

    match (purchase_date, purchase_time, total) {
        (Some(purchase_date), Some(purchase_time), Some(total)) if errors.is_empty() => {
            Ok(Receipt {
                retailer: submission.retailer.clone(),
                purchase_date,
                purchase_time,
                items,
                total,
            })
        }
        _ => Err(ValidationError { errors }),
    }
}
