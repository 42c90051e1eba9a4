//! Category types for the lazydash dashboard.
//!
//! A category is a named grouping of widgets, fixed at seed/creation time.
//! Categories are never deleted by the system itself; filtering only
//! restricts the widgets shown within each one.

use serde::{Deserialize, Serialize};

use super::widget::Widget;

// ============================================================================
// Category
// ============================================================================

/// A named, ordered grouping of widgets.
///
/// The persisted field name for `name` is `category`, matching the stored
/// dashboard layout. Order is display order; names need not be unique but
/// are treated as such in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display name of the category.
    #[serde(rename = "category")]
    pub name: String,
    /// Widgets in display order.
    pub widgets: Vec<Widget>,
}

impl Category {
    /// Creates an empty category.
    #[must_use]
    #[allow(dead_code)] // Part of the store API
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            widgets: Vec::new(),
        }
    }

    /// Creates a category with an initial widget list.
    #[must_use]
    pub fn with_widgets(name: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self {
            name: name.into(),
            widgets,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
