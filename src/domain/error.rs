//! Error types for dashboard operations.
//!
//! This module defines the custom error types used by the store, the form,
//! and the persistence layer, providing structured error handling with
//! helpful messages.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for dashboard operations.
///
/// This enum provides specific error variants for the different failure
/// modes encountered while editing and persisting the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A category index referred to a category that does not exist.
    #[error("category index {index} is out of range ({count} categories)")]
    CategoryOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of categories in the store at the time of the call.
        count: usize,
    },

    /// A chart row value could not be parsed as a finite number.
    #[error("'{raw}' is not a number (row '{label}')")]
    InvalidNumber {
        /// Label of the row that failed to validate.
        label: String,
        /// The raw text that failed to parse.
        raw: String,
    },

    /// Filesystem errors while reading or writing the persisted store.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// JSON serialization or deserialization errors.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl DashboardError {
    /// Create a new invalid number error.
    ///
    /// # Arguments
    ///
    /// * `label` - Label of the row being validated
    /// * `raw` - The raw text that failed to parse
    ///
    /// # Returns
    ///
    /// A new `DashboardError::InvalidNumber` variant.
    #[must_use]
    pub fn invalid_number(label: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::InvalidNumber {
            label: label.into(),
            raw: raw.into(),
        }
    }

    /// Create a new out-of-range category error.
    ///
    /// # Arguments
    ///
    /// * `index` - The offending category index
    /// * `count` - Number of categories in the store
    ///
    /// # Returns
    ///
    /// A new `DashboardError::CategoryOutOfRange` variant.
    #[must_use]
    pub fn category_out_of_range(index: usize, count: usize) -> Self {
        Self::CategoryOutOfRange { index, count }
    }
}

// ============================================================================
// Tests
// ============================================================================
