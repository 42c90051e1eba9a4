//! Popup/modal rendering.
//!
//! Each popup is its own module; [`render`] dispatches on the current
//! popup state and draws at most one overlay.

pub mod confirm;
pub mod help;
pub mod message;
pub mod widget_form;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, PopupState};

/// Renders the active popup, if any.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match &app.popup_state {
        PopupState::None => {}
        PopupState::WidgetForm(form) => {
            widget_form::render(frame, area, form, app.form_error.as_deref());
        }
        PopupState::ConfirmRemove { widget_name, .. } => {
            confirm::render_remove(frame, area, widget_name);
        }
        PopupState::ConfirmQuit => confirm::render_quit(frame, area),
        PopupState::Message(text) => message::render(frame, area, text),
        PopupState::Help => help::render(frame, area),
    }
}
