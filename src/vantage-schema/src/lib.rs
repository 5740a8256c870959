//! Column derivation for Vantage.
//!
//! This crate turns a collection's declared schema and the field names
//! inferred from imported data into the ordered column descriptor list
//! consumed by a rendering layer:
//!
//! - [`column`]: descriptor types (`ColumnType`, `ColumnDescriptor`)
//! - [`merge`]: the declared/inferred two-pass field merge
//! - [`system`]: the fixed system-column table
//! - [`derive_columns`]: the full derivation
//!
//! Derivation is a pure function of its inputs and never fails: unknown
//! declared kinds degrade to `String`, inferred fields to `Unknown`.

pub mod column;
pub mod merge;
pub mod system;

mod derive;

pub use column::{ColumnDescriptor, ColumnType, ValueDomain, VisibilityDefaults};
pub use derive::derive_columns;
pub use merge::{merge_fields, FieldOrigin, MergedField};
pub use system::{reserved_ids, DATA_ROOT_ID, SYSTEM_COLUMNS};
