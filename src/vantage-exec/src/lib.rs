//! Record query execution for Vantage.
//!
//! This crate turns a resolved `SelectionExpression` into a lazy stream
//! of records:
//!
//! - [`stream`]: the [`RecordStream`] type and its constructors
//! - [`store`]: the [`RecordStore`] collaborator interface
//! - [`executor`]: [`QueryExecutor`], which validates filter field
//!   references before delegating to the store
//! - [`memory`]: a full in-memory store for tests and embedding

pub mod executor;
pub mod memory;
#[cfg(test)]
mod proptest_utils;
pub mod store;
pub mod stream;

pub use executor::QueryExecutor;
pub use memory::MemoryRecordStore;
pub use store::RecordStore;
pub use stream::{empty_stream, iter_stream, vec_stream, RecordStream, RecordStreamExt};
