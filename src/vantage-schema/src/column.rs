//! Column descriptor types.

use serde::{Deserialize, Serialize};

use vantage_core::UserId;

/// Display type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Numeric column.
    Number,
    /// String column.
    String,
    /// Timestamp column.
    Datetime,
    /// List-valued column.
    List,
    /// Inferred data field with no declared type.
    Unknown,
    /// Image data field.
    Image,
    /// Audio data field.
    Audio,
    /// Audio data field with waveform display.
    AudioPlus,
}

impl ColumnType {
    /// Narrow a declared kind string to a column type.
    ///
    /// Exactly `Image`, `Audio`, `AudioPlus`, and `Unknown` survive as
    /// first-class types; every other declared kind displays as `String`.
    pub fn from_declared(kind: &str) -> Self {
        match kind {
            "Image" => Self::Image,
            "Audio" => Self::Audio,
            "AudioPlus" => Self::AudioPlus,
            "Unknown" => Self::Unknown,
            _ => Self::String,
        }
    }
}

/// Default visibility of a column per surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityDefaults {
    /// Visible in the explore surface.
    pub explore: bool,
    /// Visible in the labeling surface.
    pub labeling: bool,
}

/// Structured hint describing the value domain of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDomain {
    /// Admissible item values (currently only member user ids).
    pub items: Vec<UserId>,
}

/// Descriptor of one column visible for a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column id, unique within the descriptor list.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Display type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Target entity; always the record collection.
    pub target: String,
    /// Parent column id for grouped columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Help text shown in tooltips.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Child column ids for grouping columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    /// Structured value-domain hint.
    #[serde(rename = "schema", skip_serializing_if = "Option::is_none")]
    pub value_domain: Option<ValueDomain>,
    /// Per-surface default visibility. Grouping columns carry none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_defaults: Option<VisibilityDefaults>,
}

impl ColumnDescriptor {
    /// Target string shared by every column.
    pub const TARGET: &'static str = "records";

    /// Create a descriptor with the given id, title, and type.
    pub fn new(id: impl Into<String>, title: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            column_type,
            target: Self::TARGET.to_string(),
            parent: None,
            help: None,
            children: None,
            value_domain: None,
            visibility_defaults: None,
        }
    }

    /// Set the parent column id.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Set the child column ids.
    pub fn with_children(mut self, children: Vec<String>) -> Self {
        self.children = Some(children);
        self
    }

    /// Set the value-domain hint.
    pub fn with_value_domain(mut self, domain: ValueDomain) -> Self {
        self.value_domain = Some(domain);
        self
    }

    /// Set per-surface visibility defaults.
    pub fn with_visibility(mut self, explore: bool, labeling: bool) -> Self {
        self.visibility_defaults = Some(VisibilityDefaults { explore, labeling });
        self
    }
}
