//! Ordering keys.

use serde::{Deserialize, Serialize};

use common_error::{VantageError, VantageResult};

/// Namespace prefix tolerated on ordering parameters, e.g.
/// `records:data.image`.
const RECORDS_PREFIX: &str = "records:";

/// One key of a multi-key ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Field reference, e.g. `id` or `data.image`.
    pub field: String,
    /// Sort direction.
    pub ascending: bool,
}

impl SortKey {
    /// Create an ascending key.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    /// Create a descending key.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: false,
        }
    }

    /// Parse an ordering parameter: `"field"` ascends, `"-field"`
    /// descends; an optional `records:` namespace prefix is stripped.
    pub fn parse(param: &str) -> VantageResult<Self> {
        let trimmed = param.trim();
        let (ascending, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (false, rest),
            None => (true, trimmed),
        };
        let field = rest.strip_prefix(RECORDS_PREFIX).unwrap_or(rest);
        if field.is_empty() {
            return Err(VantageError::validation(format!(
                "empty ordering parameter: {param:?}"
            )));
        }
        Ok(Self {
            field: field.to_string(),
            ascending,
        })
    }

    /// Render back to the signed parameter form.
    pub fn to_param(&self) -> String {
        if self.ascending {
            self.field.clone()
        } else {
            format!("-{}", self.field)
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.field,
            if self.ascending { "asc" } else { "desc" }
        )
    }
}
