pub(crate) mod rules;

use serde::Serialize;

use super::domain::Receipt;

/// The seven point rules, named for audit and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    RetailerAlphanumerics,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl ScoringRule {
    pub const fn label(self) -> &'static str {
        match self {
            ScoringRule::RetailerAlphanumerics => "retailer alphanumerics",
            ScoringRule::RoundDollarTotal => "round-dollar total",
            ScoringRule::QuarterMultipleTotal => "quarter-multiple total",
            ScoringRule::ItemPairs => "item pairs",
            ScoringRule::DescriptionLength => "description length",
            ScoringRule::OddPurchaseDay => "odd purchase day",
            ScoringRule::AfternoonPurchase => "afternoon purchase",
        }
    }
}

/// Points contributed by a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: ScoringRule,
    pub points: u64,
}

/// Per-rule audit trail; `total` is always the sum of `contributions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub total: u64,
    pub contributions: Vec<RuleContribution>,
}

/// Apply every rule to a validated receipt, keeping the per-rule trail.
pub fn breakdown(receipt: &Receipt) -> ScoreBreakdown {
    let contributions: Vec<RuleContribution> = [
        (
            ScoringRule::RetailerAlphanumerics,
            rules::retailer_points(&receipt.retailer),
        ),
        (
            ScoringRule::RoundDollarTotal,
            rules::round_dollar_points(receipt.total),
        ),
        (
            ScoringRule::QuarterMultipleTotal,
            rules::quarter_multiple_points(receipt.total),
        ),
        (ScoringRule::ItemPairs, rules::item_pair_points(&receipt.items)),
        (
            ScoringRule::DescriptionLength,
            rules::description_points(&receipt.items),
        ),
        (
            ScoringRule::OddPurchaseDay,
            rules::odd_day_points(receipt.purchase_date),
        ),
        (
            ScoringRule::AfternoonPurchase,
            rules::afternoon_points(receipt.purchase_time),
        ),
    ]
    .into_iter()
    .map(|(rule, points)| RuleContribution { rule, points })
    .collect();

    let total = contributions.iter().map(|entry| entry.points).sum();

    ScoreBreakdown {
        total,
        contributions,
    }
}

/// Total points for a validated receipt. Pure and deterministic.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total
}
