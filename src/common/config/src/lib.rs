//! Configuration management for Vantage.
//!
//! Provides runtime configuration for query execution and prediction
//! dispatch.

use serde::{Deserialize, Serialize};

/// Global Vantage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VantageConfig {
    /// Query execution configuration.
    #[serde(default)]
    pub execution: ExecutionConfig,
    /// Prediction dispatch configuration.
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

/// Query execution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Soft cap on records materialized by a single selection, if any.
    #[serde(default)]
    pub max_resolved_records: Option<usize>,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            max_resolved_records: None,
        }
    }
}

/// Prediction dispatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Timeout per scoring-backend call, in milliseconds.
    ///
    /// One slow backend must not block the others indefinitely.
    #[serde(default = "default_backend_timeout_ms")]
    pub per_backend_timeout_ms: u64,
    /// Dispatch to backends concurrently instead of sequentially.
    #[serde(default)]
    pub parallel: bool,
}

fn default_backend_timeout_ms() -> u64 {
    30_000
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            per_backend_timeout_ms: default_backend_timeout_ms(),
            parallel: false,
        }
    }
}
