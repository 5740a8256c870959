//! Selection expression model and resolver for Vantage.
//!
//! This crate owns the validated, in-memory representation of "which
//! records are selected":
//!
//! - [`filter`]: the recursive filter AST passed through to the store
//! - [`sort`]: ordering keys parsed from `"field"` / `"-field"` strings
//! - [`selected`]: the explicit include/exclude overlay
//! - [`expression`]: the combined [`SelectionExpression`]
//! - [`view`]: persisted named selections and the [`ViewStore`] trait
//! - [`request`]: the inline request payload and its source split
//! - [`resolver`]: view-vs-inline resolution into one expression

pub mod expression;
pub mod filter;
#[cfg(test)]
mod proptest_utils;
pub mod request;
pub mod resolver;
pub mod selected;
pub mod sort;
pub mod view;

pub use expression::SelectionExpression;
pub use filter::{Conjunction, FilterNode, PredicateOp};
pub use request::{SelectionRequest, SelectionSource};
pub use resolver::SelectionResolver;
pub use selected::SelectedItems;
pub use sort::SortKey;
pub use view::{MemoryViewStore, View, ViewStore};
