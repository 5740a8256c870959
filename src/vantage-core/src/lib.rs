//! Core data model for Vantage.
//!
//! This crate provides the fundamental types for the record-selection
//! engine:
//! - `Value` for user-defined data fields
//! - `Record` with its fixed system attributes
//! - `DeclaredSchema` for configured field types

pub mod identifiers;
#[cfg(test)]
mod proptest_utils;
pub mod record;
pub mod schema;
pub mod types;

// Re-export commonly used types
pub use identifiers::{CollectionId, RecordId, UserId, ViewId};
pub use record::Record;
pub use schema::{DeclaredField, DeclaredSchema, UNDEFINED_FIELD};
pub use types::Value;
