//! Prediction dispatch for Vantage.
//!
//! Forwards freshly selected records to the scoring backends registered
//! for their collection. Backend internals are out of scope; this crate
//! owns only the dispatch contract: scope consistency, per-backend
//! timeouts, and failure isolation.

pub mod backend;
pub mod trigger;

pub use backend::ScoringBackend;
pub use trigger::PredictionTrigger;
