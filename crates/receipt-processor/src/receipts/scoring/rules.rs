use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use super::super::domain::{Cents, Item};

/// One point per Unicode alphanumeric character in the retailer name.
pub(crate) fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// 50 points for a whole-dollar total.
pub(crate) fn round_dollar_points(total: Cents) -> u64 {
    if total.is_round_dollar() {
        50
    } else {
        0
    }
}

/// 25 points when the total is an exact multiple of 0.25, tested in integer
/// cents so `10.30` never sneaks through a float modulo.
pub(crate) fn quarter_multiple_points(total: Cents) -> u64 {
    if total.is_quarter_multiple() {
        25
    } else {
        0
    }
}

/// 5 points for every two items.
pub(crate) fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() as u64 / 2) * 5
}

/// For each item whose trimmed description length is a multiple of 3
/// (length 0 included), add `ceil(price * 0.2)`, computed as
/// `ceil(cents / 500)` in integer arithmetic.
pub(crate) fn description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
        .map(|item| (item.price.0 + 499) / 500)
        .sum()
}

/// 6 points when the day of the month is odd.
pub(crate) fn odd_day_points(purchase_date: NaiveDate) -> u64 {
    if purchase_date.day() % 2 == 1 {
        6
    } else {
        0
    }
}

/// 10 points strictly between 14:00 and 16:00; both boundaries score zero.
pub(crate) fn afternoon_points(purchase_time: NaiveTime) -> u64 {
    let minute_of_day = purchase_time.hour() * 60 + purchase_time.minute();
    if minute_of_day > 14 * 60 && minute_of_day < 16 * 60 {
        10
    } else {
        0
    }
}
