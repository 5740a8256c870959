//! The inline selection request payload.

use serde::{Deserialize, Serialize};

use vantage_core::ViewId;

use crate::filter::FilterNode;

/// Raw selection request payload.
///
/// `selected_items` stays an untyped JSON value here on purpose: its
/// shape is validated by the resolver so malformed payloads surface as
/// `Validation` errors rather than transport-level failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Persisted view reference; positive ids win over inline fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_id: Option<ViewId>,
    /// Inline selection overlay, shape-checked during resolution.
    #[serde(
        rename = "selectedItems",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_items: Option<serde_json::Value>,
    /// Inline filter tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterNode>,
    /// Inline ordering parameters (`"field"` / `"-field"`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ordering: Vec<String>,
}

impl SelectionRequest {
    /// Create an empty inline request (selects everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request referencing a persisted view.
    pub fn for_view(view_id: ViewId) -> Self {
        Self {
            view_id: Some(view_id),
            ..Self::default()
        }
    }

    /// Split the request into its selection source.
    pub fn source(&self) -> SelectionSource {
        match self.view_id {
            Some(id) if id > 0 => SelectionSource::ViewSourced(id),
            _ => SelectionSource::Inline,
        }
    }
}

/// Where a request's selection state comes from. The two paths are
/// mutually exclusive per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// A persisted view supplies filters, ordering, and overlay.
    ViewSourced(ViewId),
    /// The request body supplies them inline.
    Inline,
}
