//! Receipt points service core: validation, scoring, and score storage.
//!
//! The `receipts` module owns the domain pipeline (validator, scoring rules,
//! content digest, store, service, router); `config`, `telemetry`, and `error`
//! cover the runtime plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
