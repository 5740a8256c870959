//! Declared schema: configured field names and their declared kinds.

use serde::{Deserialize, Serialize};

/// Sentinel field name assigned to imported data with no resolvable
/// field name. It is auto-resolved (dropped) once a real declared field
/// exists.
pub const UNDEFINED_FIELD: &str = "$undefined$";

/// A single declared field: its name and the kind string from the
/// collection's label configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredField {
    /// Field name.
    pub name: String,
    /// Declared kind, e.g. `"Image"` or `"Text"`. Arbitrary strings are
    /// allowed; unrecognized kinds are narrowed downstream.
    pub kind: String,
}

/// Ordered mapping from field name to declared kind.
///
/// Declaration order is significant: it drives the ordering of derived
/// data columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredSchema {
    fields: Vec<DeclaredField>,
}

impl DeclaredSchema {
    /// Create an empty declared schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from `(name, kind)` pairs, preserving order.
    pub fn from_pairs<N, K>(pairs: impl IntoIterator<Item = (N, K)>) -> Self
    where
        N: Into<String>,
        K: Into<String>,
    {
        let mut schema = Self::new();
        for (name, kind) in pairs {
            schema.declare(name, kind);
        }
        schema
    }

    /// Declare a field. Re-declaring an existing name updates its kind
    /// in place without changing its position.
    pub fn declare(&mut self, name: impl Into<String>, kind: impl Into<String>) {
        let name = name.into();
        let kind = kind.into();
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == name) {
            existing.kind = kind;
        } else {
            self.fields.push(DeclaredField { name, kind });
        }
    }

    /// Check whether a field name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Get the declared kind of a field, if declared.
    pub fn kind_of(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.kind.as_str())
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &DeclaredField> {
        self.fields.iter()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check whether at least one real (non-sentinel) field is declared.
    pub fn has_real_fields(&self) -> bool {
        self.fields.iter().any(|f| f.name != UNDEFINED_FIELD)
    }
}
