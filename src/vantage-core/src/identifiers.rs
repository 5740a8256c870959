//! Type identifiers for records, collections, views, and users.

/// Record identifier.
pub type RecordId = u64;

/// Collection (project) identifier.
pub type CollectionId = u64;

/// Persisted-view identifier. Requests reference views by positive id.
pub type ViewId = u64;

/// User identifier, used for contributing-member lists.
pub type UserId = u64;

/// Namespace prefix for field references into user data, e.g. `data.image`.
pub const DATA_PREFIX: &str = "data.";
