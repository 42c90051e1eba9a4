//! Action dispatch: the single mutation path for application state.

use arboard::Clipboard;
use color_eyre::Result;

use super::{App, PopupState, now_ms};
use crate::event::Action;
use crate::form::WidgetForm;

impl App {
    /// Applies an [`Action`] to the application state.
    ///
    /// Store mutations are immediately followed by a save; failures of any
    /// kind surface as popups rather than propagating.
    pub fn update(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.exit = true,
            Action::OpenConfirmQuit => self.popup_state = PopupState::ConfirmQuit,
            Action::ClearPopup => {
                self.popup_state = PopupState::None;
                self.form_error = None;
            }

            Action::FocusSearch => self.search_focused = true,
            Action::UnfocusSearch => self.search_focused = false,
            Action::SearchInput(c) => {
                self.search_input.push(c);
                self.selected_widget = 0;
            }
            Action::SearchBackspace => {
                self.search_input.pop();
                self.selected_widget = 0;
            }

            Action::CycleTimeFilter => {
                self.time_filter = self.time_filter.next();
                self.selected_widget = 0;
            }

            Action::NextCategory => self.move_category(1),
            Action::PrevCategory => self.move_category(-1),
            Action::NextWidget => self.move_widget(1),
            Action::PrevWidget => self.move_widget(-1),

            Action::OpenWidgetForm => {
                self.form_error = None;
                self.popup_state = PopupState::WidgetForm(WidgetForm::new(self.selected_category));
            }
            Action::FormInput(c) => self.with_form(|form| form.push_char(c)),
            Action::FormBackspace => self.with_form(WidgetForm::backspace),
            Action::FormFocusNext => self.with_form(WidgetForm::next_field),
            Action::FormFocusPrev => self.with_form(WidgetForm::prev_field),
            Action::FormCycleTypeNext => self.with_form(WidgetForm::cycle_type_next),
            Action::FormCycleTypePrev => self.with_form(WidgetForm::cycle_type_prev),
            Action::FormAddRow => self.with_form(WidgetForm::add_row),
            Action::FormSubmit => self.submit_form(),

            Action::OpenConfirmRemove => self.open_confirm_remove(),
            Action::ConfirmRemove => self.remove_confirmed(),

            Action::CopyWidget => self.copy_selected_widget(),
            Action::ToggleHelp => {
                self.popup_state = if self.popup_state == PopupState::Help {
                    PopupState::None
                } else {
                    PopupState::Help
                };
            }
            Action::ShowMessage(message) => self.popup_state = PopupState::Message(message),
        }
        Ok(())
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    fn move_category(&mut self, delta: isize) {
        let count = self.dashboard.categories().len();
        if count == 0 {
            return;
        }
        let current = self.selected_category as isize;
        self.selected_category = (current + delta).rem_euclid(count as isize) as usize;
        self.selected_widget = 0;
    }

    fn move_widget(&mut self, delta: isize) {
        let filtered = self.filtered_view();
        let (cat, widget) = self.clamped_selection(&filtered);
        let count = filtered.get(cat).map_or(0, |c| c.widgets.len());
        if count == 0 {
            return;
        }
        let next = (widget as isize + delta).clamp(0, count as isize - 1);
        self.selected_widget = next as usize;
    }

    // ========================================================================
    // Form
    // ========================================================================

    fn with_form(&mut self, edit: impl FnOnce(&mut WidgetForm)) {
        if let PopupState::WidgetForm(form) = &mut self.popup_state {
            edit(form);
            self.form_error = None;
        }
    }

    fn submit_form(&mut self) {
        let PopupState::WidgetForm(form) = &self.popup_state else {
            return;
        };

        let widget = match form.commit(now_ms()) {
            Ok(widget) => widget,
            Err(err) => {
                self.form_error = Some(err.to_string());
                return;
            }
        };

        let category_index = form.category_index;
        match self.dashboard.add_widget(category_index, widget) {
            Ok(added) => {
                tracing::info!(
                    "added {} widget '{}' to category {category_index}",
                    added.kind.type_tag(),
                    added.name
                );
                self.popup_state = PopupState::None;
                self.form_error = None;
                self.persist();
            }
            Err(err) => {
                // Stale category index: drop the draft, surface the error.
                self.popup_state = PopupState::Message(err.to_string());
                self.form_error = None;
            }
        }
    }

    // ========================================================================
    // Removal
    // ========================================================================

    fn open_confirm_remove(&mut self) {
        let filtered = self.filtered_view();
        let (cat, _) = self.clamped_selection(&filtered);
        match self.selected_widget_in(&filtered) {
            Some(widget) => {
                self.popup_state = PopupState::ConfirmRemove {
                    category_index: cat,
                    widget_id: widget.id,
                    widget_name: widget.name.clone(),
                };
            }
            None => {
                self.popup_state =
                    PopupState::Message("No widget selected.".to_string());
            }
        }
    }

    fn remove_confirmed(&mut self) {
        let PopupState::ConfirmRemove {
            category_index,
            widget_id,
            ..
        } = self.popup_state
        else {
            return;
        };

        if self.dashboard.remove_widget(category_index, widget_id) {
            tracing::info!("removed widget {widget_id} from category {category_index}");
            self.persist();
        }
        self.popup_state = PopupState::None;

        // Keep the selection on a visible widget after the removal.
        let filtered = self.filtered_view();
        let (_, widget) = self.clamped_selection(&filtered);
        self.selected_widget = widget;
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    fn copy_selected_widget(&mut self) {
        let filtered = self.filtered_view();
        let Some(widget) = self.selected_widget_in(&filtered) else {
            self.popup_state = PopupState::Message("No widget selected.".to_string());
            return;
        };

        let json = match serde_json::to_string_pretty(widget) {
            Ok(json) => json,
            Err(err) => {
                self.popup_state = PopupState::Message(format!("Copy failed: {err}"));
                return;
            }
        };

        self.popup_state = match Clipboard::new().and_then(|mut cb| cb.set_text(json)) {
            Ok(()) => PopupState::Message("Widget copied to clipboard!".to_string()),
            Err(_) => PopupState::Message("Clipboard not available".to_string()),
        };
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Writes the full store to disk; failures become a popup, never a
    /// crash.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save(self.dashboard.categories()) {
            tracing::error!("failed to save dashboard: {err}");
            self.popup_state = PopupState::Message(format!("Failed to save dashboard: {err}"));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TimeFilter, WidgetId};
    use crate::form::FormWidgetType;
    use crate::test_utils::test_app;

    fn open_form(app: &mut App) {
        app.update(Action::OpenWidgetForm).unwrap();
        assert!(matches!(app.popup_state, PopupState::WidgetForm(_)));
    }

    #[test]
    fn test_search_input_builds_query() {
        let mut app = test_app();
        app.update(Action::FocusSearch).unwrap();
        for c in "Risk".chars() {
            app.update(Action::SearchInput(c)).unwrap();
        }
        app.update(Action::SearchBackspace).unwrap();
        app.update(Action::UnfocusSearch).unwrap();

        assert_eq!(app.search_input, "Ris");
        assert!(!app.search_focused);
    }

    #[test]
    fn test_cycle_time_filter() {
        let mut app = test_app();
        app.update(Action::CycleTimeFilter).unwrap();
        assert_eq!(app.time_filter, TimeFilter::Last24Hours);
    }

    #[test]
    fn test_category_navigation_wraps() {
        let mut app = test_app();
        app.update(Action::PrevCategory).unwrap();
        assert_eq!(app.selected_category, 2);
        app.update(Action::NextCategory).unwrap();
        assert_eq!(app.selected_category, 0);
    }

    #[test]
    fn test_widget_navigation_clamps() {
        let mut app = test_app();
        for _ in 0..10 {
            app.update(Action::NextWidget).unwrap();
        }
        assert_eq!(app.selected_widget, 3); // seed categories have 4 widgets

        for _ in 0..10 {
            app.update(Action::PrevWidget).unwrap();
        }
        assert_eq!(app.selected_widget, 0);
    }

    #[test]
    fn test_form_submit_adds_widget_and_persists() {
        let mut app = test_app();
        let before = app.dashboard.categories()[0].widgets.len();

        open_form(&mut app);
        app.update(Action::FormCycleTypeNext).unwrap(); // Bar
        app.update(Action::FormFocusNext).unwrap(); // Name
        for c in "Errors".chars() {
            app.update(Action::FormInput(c)).unwrap();
        }
        app.update(Action::FormFocusNext).unwrap(); // Row label
        app.update(Action::FormInput('e')).unwrap();
        app.update(Action::FormFocusNext).unwrap(); // Row value
        app.update(Action::FormInput('4')).unwrap();
        app.update(Action::FormSubmit).unwrap();

        assert_eq!(app.popup_state, PopupState::None);
        let widgets = &app.dashboard.categories()[0].widgets;
        assert_eq!(widgets.len(), before + 1);
        assert_eq!(widgets.last().unwrap().name, "Errors");

        // The mutation reached disk.
        let persisted = app.storage.try_load().unwrap();
        assert_eq!(persisted, app.dashboard.categories());
    }

    #[test]
    fn test_form_submit_invalid_number_keeps_form_open() {
        let mut app = test_app();
        open_form(&mut app);
        app.update(Action::FormFocusNext).unwrap(); // Name
        app.update(Action::FormFocusNext).unwrap(); // Row label
        app.update(Action::FormInput('a')).unwrap();
        app.update(Action::FormFocusNext).unwrap(); // Row value
        app.update(Action::FormInput('x')).unwrap();
        app.update(Action::FormSubmit).unwrap();

        assert!(matches!(app.popup_state, PopupState::WidgetForm(_)));
        assert!(app.form_error.as_deref().unwrap().contains("not a number"));

        // Editing clears the stale error.
        app.update(Action::FormBackspace).unwrap();
        assert!(app.form_error.is_none());
    }

    #[test]
    fn test_stale_category_index_surfaces_error() {
        let mut app = test_app();
        open_form(&mut app);
        if let PopupState::WidgetForm(form) = &mut app.popup_state {
            form.category_index = 99;
            form.widget_type = FormWidgetType::Empty;
        }
        let count = app.dashboard.widget_count();

        app.update(Action::FormSubmit).unwrap();

        assert!(matches!(app.popup_state, PopupState::Message(_)));
        assert_eq!(app.dashboard.widget_count(), count);
    }

    #[test]
    fn test_remove_flow_persists_without_widget() {
        let mut app = test_app();
        let target = app.dashboard.categories()[0].widgets[0].id;

        app.update(Action::OpenConfirmRemove).unwrap();
        assert!(matches!(
            app.popup_state,
            PopupState::ConfirmRemove { widget_id, .. } if widget_id == target
        ));

        app.update(Action::ConfirmRemove).unwrap();
        assert_eq!(app.popup_state, PopupState::None);

        let persisted = app.storage.try_load().unwrap();
        let ids: Vec<WidgetId> = persisted
            .iter()
            .flat_map(|c| c.widgets.iter())
            .map(|w| w.id)
            .collect();
        assert!(!ids.contains(&target));
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn test_remove_with_no_visible_widget_shows_message() {
        let mut app = test_app();
        app.search_input = "no widget matches this".to_string();

        app.update(Action::OpenConfirmRemove).unwrap();

        assert_eq!(
            app.popup_state,
            PopupState::Message("No widget selected.".to_string())
        );
    }

    #[test]
    fn test_copy_widget_reports_via_popup() {
        let mut app = test_app();
        app.update(Action::CopyWidget).unwrap();
        // Either copied or clipboard unavailable (headless), both surface
        // as a message popup.
        assert!(matches!(app.popup_state, PopupState::Message(_)));
    }

    #[test]
    fn test_help_toggles() {
        let mut app = test_app();
        app.update(Action::ToggleHelp).unwrap();
        assert_eq!(app.popup_state, PopupState::Help);
        app.update(Action::ToggleHelp).unwrap();
        assert_eq!(app.popup_state, PopupState::None);
    }

    #[test]
    fn test_quit_confirmation_flow() {
        let mut app = test_app();
        app.update(Action::OpenConfirmQuit).unwrap();
        assert_eq!(app.popup_state, PopupState::ConfirmQuit);
        app.update(Action::ClearPopup).unwrap();
        assert!(!app.exit);
        app.update(Action::Quit).unwrap();
        assert!(app.exit);
    }
}
