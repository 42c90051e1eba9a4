//! Widget store for the lazydash dashboard.
//!
//! The store owns the ordered category list and its create/remove/filter
//! operations. It performs no I/O itself: persistence is an explicit
//! [`storage::Storage::save`] issued by the caller after each mutating
//! operation.
//!
//! # Module Organization
//!
//! - [`seed`] - Built-in seed dashboard used on first launch and fallback
//! - [`storage`] - JSON file persistence

// ============================================================================
// Module Declarations
// ============================================================================

pub mod seed;
pub mod storage;

// ============================================================================
// Re-exports
// ============================================================================

pub use seed::seed_categories;
pub use storage::Storage;

use crate::domain::{Category, DashboardError, TimeFilter, Widget, WidgetId};

// ============================================================================
// Dashboard Store
// ============================================================================

/// The in-memory widget store: an ordered list of categories, each holding
/// an ordered list of widgets.
///
/// Widgets are appended on add and removed by id; they are never moved
/// between categories or mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    categories: Vec<Category>,
}

impl Dashboard {
    /// Creates a store from an existing category list.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Creates a store holding the seed dashboard.
    #[must_use]
    #[allow(dead_code)] // Part of the store API
    pub fn seeded(now_ms: i64) -> Self {
        Self::new(seed_categories(now_ms))
    }

    /// Returns the category list.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Appends a committed widget to the given category.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::CategoryOutOfRange`] if `category_index`
    /// does not refer to an existing category; the store is left unchanged.
    pub fn add_widget(
        &mut self,
        category_index: usize,
        widget: Widget,
    ) -> Result<&Widget, DashboardError> {
        let count = self.categories.len();
        let category = self
            .categories
            .get_mut(category_index)
            .ok_or_else(|| DashboardError::category_out_of_range(category_index, count))?;
        category.widgets.push(widget);
        Ok(category.widgets.last().expect("just pushed"))
    }

    /// Removes the widget with the given id from the given category.
    ///
    /// Returns whether a widget was removed; an out-of-range index or an
    /// unknown id is a no-op.
    pub fn remove_widget(&mut self, category_index: usize, id: WidgetId) -> bool {
        let Some(category) = self.categories.get_mut(category_index) else {
            return false;
        };
        let before = category.widgets.len();
        category.widgets.retain(|w| w.id != id);
        category.widgets.len() != before
    }

    /// Produces a filtered copy of the category list.
    ///
    /// Each category's widget list is restricted to widgets matching both
    /// the text and the time predicate, in original order. Categories are
    /// never dropped, even when left with no matching widgets, so category
    /// indices in the filtered view line up with the store.
    ///
    /// `now_ms` is the instant the time windows end at; callers pass the
    /// current wall clock.
    #[must_use]
    pub fn filter(&self, search: &str, time_filter: TimeFilter, now_ms: i64) -> Vec<Category> {
        self.categories
            .iter()
            .map(|cat| Category {
                name: cat.name.clone(),
                widgets: cat
                    .widgets
                    .iter()
                    .filter(|w| w.matches_search(search) && time_filter.matches(w.timestamp, now_ms))
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// Total number of widgets across all categories.
    #[must_use]
    #[allow(dead_code)] // Part of the store API
    pub fn widget_count(&self) -> usize {
        self.categories.iter().map(|c| c.widgets.len()).sum()
    }
}

// ============================================================================
// Tests
// ============================================================================
