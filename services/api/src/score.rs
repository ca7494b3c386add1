use clap::Args;
use receipt_processor::error::AppError;
use receipt_processor::receipts::{breakdown, validate, ReceiptSubmission};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    pub(crate) receipt: PathBuf,
}

/// Score a receipt offline, printing the per-rule contributions.
pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.receipt)?;
    let submission: ReceiptSubmission = serde_json::from_str(&raw)?;

    match validate(&submission) {
        Ok(receipt) => {
            let breakdown = breakdown(&receipt);
            for entry in &breakdown.contributions {
                println!("{:<24} {:>5}", entry.rule.label(), entry.points);
            }
            println!("{:<24} {:>5}", "total", breakdown.total);
            Ok(())
        }
        Err(error) => {
            for field in &error.errors {
                eprintln!("{}: {}", field.loc, field.message);
            }
            Err(AppError::from(error))
        }
    }
}
