//! Input handling: translates crossterm events into [`Action`]s.
//!
//! The translation depends on the current UI mode: an open popup captures
//! all keys, a focused search bar captures text input, and the main view
//! exposes the navigation and editing shortcuts.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::Action;
use crate::form::{FormField, WidgetForm};
use crate::state::{App, PopupState};

/// Handles a crossterm event and returns an optional [`Action`].
pub fn handle_event(app: &App, event: Event) -> Option<Action> {
    if let Event::Key(key) = event
        && key.kind == KeyEventKind::Press
    {
        return handle_key_press(app, key);
    }
    None
}

/// Routes a key press to the handler for the current UI mode.
fn handle_key_press(app: &App, key: KeyEvent) -> Option<Action> {
    match &app.popup_state {
        PopupState::WidgetForm(form) => handle_form_keys(key, form),
        PopupState::ConfirmRemove { .. } => handle_confirm_keys(key, Action::ConfirmRemove),
        PopupState::ConfirmQuit => handle_confirm_keys(key, Action::Quit),
        PopupState::Message(_) => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ClearPopup),
            _ => None,
        },
        PopupState::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::ClearPopup),
            _ => None,
        },
        PopupState::None if app.search_focused => handle_search_keys(key),
        PopupState::None => handle_main_keys(key),
    }
}

/// Key handling while the add-widget form is open.
fn handle_form_keys(key: KeyEvent, form: &WidgetForm) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') => Some(Action::FormAddRow),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::ClearPopup),
        KeyCode::Enter => Some(Action::FormSubmit),
        KeyCode::Tab | KeyCode::Down => Some(Action::FormFocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FormFocusPrev),
        KeyCode::Left if form.active_field == FormField::Type => Some(Action::FormCycleTypePrev),
        KeyCode::Right if form.active_field == FormField::Type => Some(Action::FormCycleTypeNext),
        KeyCode::Char(c) => Some(Action::FormInput(c)),
        KeyCode::Backspace => Some(Action::FormBackspace),
        _ => None,
    }
}

/// Key handling for yes/no confirmation popups.
fn handle_confirm_keys(key: KeyEvent, confirm: Action) -> Option<Action> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => Some(confirm),
        KeyCode::Char('n') | KeyCode::Esc => Some(Action::ClearPopup),
        _ => None,
    }
}

/// Key handling while the inline search bar is focused.
fn handle_search_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(Action::UnfocusSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        _ => None,
    }
}

/// Key handling for the main dashboard view.
fn handle_main_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::OpenConfirmQuit),
        KeyCode::Char('/') => Some(Action::FocusSearch),
        KeyCode::Char('t') => Some(Action::CycleTimeFilter),
        KeyCode::Char('a') => Some(Action::OpenWidgetForm),
        KeyCode::Char('x') | KeyCode::Delete => Some(Action::OpenConfirmRemove),
        KeyCode::Char('c') => Some(Action::CopyWidget),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Tab => Some(Action::NextCategory),
        KeyCode::BackTab => Some(Action::PrevCategory),
        KeyCode::Right | KeyCode::Down => Some(Action::NextWidget),
        KeyCode::Left | KeyCode::Up => Some(Action::PrevWidget),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
