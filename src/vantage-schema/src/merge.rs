//! Two-pass merge of declared and inferred field maps.

use vantage_core::{DeclaredSchema, UNDEFINED_FIELD};

/// Where a merged field came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOrigin {
    /// Declared in the label configuration, with its declared kind.
    Declared(String),
    /// Observed in imported data only; no declared type.
    Inferred,
}

/// One entry of the merged field map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedField {
    /// Field name.
    pub name: String,
    /// Source of the field.
    pub origin: FieldOrigin,
}

impl MergedField {
    /// Check whether this field was declared.
    pub fn is_declared(&self) -> bool {
        matches!(self.origin, FieldOrigin::Declared(_))
    }
}

/// Merge declared fields with field names inferred from imported data.
///
/// Declared fields come first, in declaration order; inferred-only
/// fields are appended in discovery order. The `$undefined$` sentinel is
/// dropped from the result whenever at least one real declared field
/// exists, because labeling resolves it automatically.
pub fn merge_fields(declared: &DeclaredSchema, inferred: &[String]) -> Vec<MergedField> {
    let mut merged: Vec<MergedField> = declared
        .iter()
        .map(|f| MergedField {
            name: f.name.clone(),
            origin: FieldOrigin::Declared(f.kind.clone()),
        })
        .collect();

    for name in inferred {
        if !declared.contains(name) && !merged.iter().any(|m| &m.name == name) {
            merged.push(MergedField {
                name: name.clone(),
                origin: FieldOrigin::Inferred,
            });
        }
    }

    if declared.has_real_fields() {
        merged.retain(|m| m.name != UNDEFINED_FIELD);
    }

    merged
}
