//! Application state for the lazydash TUI.
//!
//! The [`App`] struct owns the widget store, its storage handle, and all
//! UI-level state: search input, time filter, selection, and the popup
//! state machine. Mutations flow through [`App::update`] in response to
//! [`crate::event::Action`]s; every store mutation is followed by an
//! explicit save.

mod update;

use chrono::Utc;

use crate::domain::{Category, TimeFilter, Widget, WidgetId};
use crate::form::WidgetForm;
use crate::store::{Dashboard, Storage};

// ============================================================================
// Popup State
// ============================================================================

/// Represents the current popup/modal state.
///
/// Only one popup can be active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// The add-widget form.
    WidgetForm(WidgetForm),
    /// Confirmation before removing a widget.
    ConfirmRemove {
        /// Category holding the widget.
        category_index: usize,
        /// Id of the widget to remove.
        widget_id: WidgetId,
        /// Name shown in the confirmation text.
        widget_name: String,
    },
    /// Quit confirmation popup.
    ConfirmQuit,
    /// Message/notification popup.
    Message(String),
    /// Keyboard reference popup.
    Help,
}

// ============================================================================
// App
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// The widget store.
    pub dashboard: Dashboard,
    /// Persistence handle; saved to after every store mutation.
    pub storage: Storage,
    /// Inline search text.
    pub search_input: String,
    /// Whether the search bar has keyboard focus.
    pub search_focused: bool,
    /// Active time filter.
    pub time_filter: TimeFilter,
    /// Selected category tab index.
    pub selected_category: usize,
    /// Selected widget index within the filtered view of the selected
    /// category.
    pub selected_widget: usize,
    /// Current popup/modal state.
    pub popup_state: PopupState,
    /// Validation error from the last form submit, shown inside the form.
    pub form_error: Option<String>,
    /// Whether the application should exit.
    pub exit: bool,
}

impl App {
    /// Creates the app, loading the persisted dashboard (or the seed).
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        let dashboard = Dashboard::new(storage.load_or_seed(now_ms()));
        Self {
            dashboard,
            storage,
            search_input: String::new(),
            search_focused: false,
            time_filter: TimeFilter::default(),
            selected_category: 0,
            selected_widget: 0,
            popup_state: PopupState::None,
            form_error: None,
            exit: false,
        }
    }

    /// Returns the store filtered by the current search text and time
    /// filter, evaluated against the current wall clock.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<Category> {
        self.dashboard
            .filter(&self.search_input, self.time_filter, now_ms())
    }

    /// Clamps the current selection against a filtered view.
    ///
    /// Returns `(category_index, widget_index)`, both safe to index with
    /// (widget index is 0 when the category has no visible widgets).
    #[must_use]
    pub fn clamped_selection(&self, filtered: &[Category]) -> (usize, usize) {
        let cat = self
            .selected_category
            .min(filtered.len().saturating_sub(1));
        let count = filtered.get(cat).map_or(0, |c| c.widgets.len());
        let widget = if count == 0 {
            0
        } else {
            self.selected_widget.min(count - 1)
        };
        (cat, widget)
    }

    /// Returns the selected widget in a filtered view, if any is visible.
    #[must_use]
    pub fn selected_widget_in<'a>(&self, filtered: &'a [Category]) -> Option<&'a Widget> {
        let (cat, widget) = self.clamped_selection(filtered);
        filtered.get(cat).and_then(|c| c.widgets.get(widget))
    }
}

/// Current wall clock in milliseconds since the epoch.
#[must_use]
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
