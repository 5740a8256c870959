//! Record representation: fixed system attributes plus user data fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::identifiers::{CollectionId, RecordId, UserId, DATA_PREFIX};
use crate::types::Value;

/// An item in a managed collection.
///
/// System attributes are fixed; user-defined data fields live in `data`
/// and are addressed through the `data.` namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier, unique within the store.
    pub id: RecordId,
    /// Owning collection.
    pub collection: CollectionId,
    /// User-defined data fields.
    #[serde(default)]
    pub data: HashMap<String, Value>,
    /// Last annotation time, epoch milliseconds.
    #[serde(default)]
    pub completed_at: Option<i64>,
    /// Creation time, epoch milliseconds.
    #[serde(default)]
    pub created_at: i64,
    /// Total annotations on this record.
    #[serde(default)]
    pub total_annotations: u32,
    /// Fully cancelled (skipped) annotations.
    #[serde(default)]
    pub cancelled_annotations: u32,
    /// Total predictions for this record.
    #[serde(default)]
    pub total_predictions: u32,
    /// Annotation results stacked over all annotations.
    #[serde(default)]
    pub annotations_results: Option<String>,
    /// Average prediction score over all predictions.
    #[serde(default)]
    pub predictions_score: Option<f64>,
    /// Prediction results stacked over all predictions.
    #[serde(default)]
    pub predictions_results: Option<String>,
    /// Source file name from the import step.
    #[serde(default)]
    pub file_upload: Option<String>,
    /// Users who completed this record.
    #[serde(default)]
    pub annotators: Vec<UserId>,
}

impl Record {
    /// Create a new record with empty data.
    pub fn new(id: RecordId, collection: CollectionId) -> Self {
        Self {
            id,
            collection,
            data: HashMap::new(),
            completed_at: None,
            created_at: 0,
            total_annotations: 0,
            cancelled_annotations: 0,
            total_predictions: 0,
            annotations_results: None,
            predictions_score: None,
            predictions_results: None,
            file_upload: None,
            annotators: Vec::new(),
        }
    }

    /// Set a data field.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Set the creation time.
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the completion time.
    pub fn with_completed_at(mut self, completed_at: i64) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Set the average prediction score.
    pub fn with_predictions_score(mut self, score: f64) -> Self {
        self.predictions_score = Some(score);
        self
    }

    /// Set annotation counters.
    pub fn with_annotations(mut self, total: u32, cancelled: u32) -> Self {
        self.total_annotations = total;
        self.cancelled_annotations = cancelled;
        self
    }

    /// Look up a system attribute by its column id.
    ///
    /// Returns `None` for names that are not system attributes.
    pub fn system_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Int64(self.id as i64)),
            "completed_at" => Some(self.completed_at.map_or(Value::Null, Value::Int64)),
            "created_at" => Some(Value::Int64(self.created_at)),
            "total_annotations" => Some(Value::Int64(i64::from(self.total_annotations))),
            "cancelled_annotations" => Some(Value::Int64(i64::from(self.cancelled_annotations))),
            "total_predictions" => Some(Value::Int64(i64::from(self.total_predictions))),
            "annotations_results" => Some(
                self.annotations_results
                    .clone()
                    .map_or(Value::Null, Value::String),
            ),
            "predictions_score" => Some(self.predictions_score.map_or(Value::Null, Value::Float64)),
            "predictions_results" => Some(
                self.predictions_results
                    .clone()
                    .map_or(Value::Null, Value::String),
            ),
            "file_upload" => Some(self.file_upload.clone().map_or(Value::Null, Value::String)),
            "annotators" => Some(Value::List(
                self.annotators
                    .iter()
                    .map(|u| Value::Int64(*u as i64))
                    .collect(),
            )),
            _ => None,
        }
    }

    /// Resolve a field reference against this record.
    ///
    /// `data.<name>` addresses user data (missing keys resolve to `Null`);
    /// anything else must be a system attribute. Unknown references
    /// return `None`.
    pub fn field_value(&self, field: &str) -> Option<Value> {
        if let Some(name) = field.strip_prefix(DATA_PREFIX) {
            Some(self.data.get(name).cloned().unwrap_or(Value::Null))
        } else {
            self.system_value(field)
        }
    }
}
