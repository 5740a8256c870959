//! Error types and result aliases for Vantage.
//!
//! This module provides the core error handling infrastructure shared by
//! every crate in the workspace.

mod error;

pub use error::{GenericError, VantageError, VantageResult};
