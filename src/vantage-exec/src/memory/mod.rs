//! In-memory record store.

mod eval;
mod store;

pub use store::MemoryRecordStore;
