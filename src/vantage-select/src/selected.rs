//! The explicit include/exclude selection overlay.

use serde::{Deserialize, Serialize};

use common_error::{VantageError, VantageResult};
use vantage_core::RecordId;

/// Which records a request explicitly selects.
///
/// Exactly one of the two variants is meaningful: `All` selects every
/// record in scope except the excluded ids; `Explicit` selects exactly
/// the included ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SelectedItemsRepr", into = "SelectedItemsRepr")]
pub enum SelectedItems {
    /// Everything in scope minus `excluded`.
    All {
        /// Record ids removed from the selection.
        excluded: Vec<RecordId>,
    },
    /// Exactly `included`, further narrowed by filters if present.
    Explicit {
        /// Record ids making up the selection.
        included: Vec<RecordId>,
    },
}

impl Default for SelectedItems {
    /// The default overlay selects everything: `{"all": true,
    /// "excluded": []}`.
    fn default() -> Self {
        Self::All { excluded: vec![] }
    }
}

impl SelectedItems {
    /// Parse the overlay from a raw request value, enforcing the
    /// mapping shape `{"all": bool, "excluded"|"included": [...]}`.
    pub fn from_json(value: &serde_json::Value) -> VantageResult<Self> {
        if !value.is_object() {
            return Err(VantageError::validation(
                "selectedItems must be a mapping: \
                 {\"all\": [true|false], \"excluded | included\": [...record_ids...]}",
            ));
        }
        serde_json::from_value(value.clone())
            .map_err(|e| VantageError::validation(format!("invalid selectedItems: {e}")))
    }

    /// Check whether this overlay selects the whole scope.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All { .. })
    }
}

/// Wire representation of [`SelectedItems`].
#[derive(Debug, Serialize, Deserialize)]
struct SelectedItemsRepr {
    all: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    excluded: Option<Vec<RecordId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    included: Option<Vec<RecordId>>,
}

impl TryFrom<SelectedItemsRepr> for SelectedItems {
    type Error = VantageError;

    fn try_from(repr: SelectedItemsRepr) -> VantageResult<Self> {
        match (repr.all, repr.excluded, repr.included) {
            (true, excluded, None) => Ok(Self::All {
                excluded: excluded.unwrap_or_default(),
            }),
            (false, None, included) => Ok(Self::Explicit {
                included: included.unwrap_or_default(),
            }),
            (true, _, Some(_)) => Err(VantageError::validation(
                "selectedItems with all=true takes \"excluded\", not \"included\"",
            )),
            (false, Some(_), _) => Err(VantageError::validation(
                "selectedItems with all=false takes \"included\", not \"excluded\"",
            )),
        }
    }
}

impl From<SelectedItems> for SelectedItemsRepr {
    fn from(selected: SelectedItems) -> Self {
        match selected {
            SelectedItems::All { excluded } => Self {
                all: true,
                excluded: Some(excluded),
                included: None,
            },
            SelectedItems::Explicit { included } => Self {
                all: false,
                excluded: None,
                included: Some(included),
            },
        }
    }
}
