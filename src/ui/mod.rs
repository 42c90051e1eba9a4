//! UI rendering module for the lazydash TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of all UI components.
//!
//! # Module Structure
//!
//! - `panels` - Category tabs and the widget card grid
//! - `popups` - Modal dialogs (widget form, confirmations, messages, help)
//! - `header` - Title, search bar, and time filter
//! - `footer` - Keybinding hints
//! - `layout` - Layout constants and popup centering
//! - `helpers` - Shared helpers for styled blocks

pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::state::App;

use layout::{FOOTER_HEIGHT, HEADER_HEIGHT};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draws the header (search + time filter), the category/widget content,
/// the footer, and finally the active popup overlay.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app);
    panels::render(frame, chunks[1], app);
    footer::render(frame, chunks[2], app);

    popups::render(frame, frame.area(), app);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Action;
    use crate::test_utils::{buffer_string, test_app, test_terminal_100x40};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::*;

    #[rstest]
    fn test_full_frame_renders_dashboard(test_terminal_100x40: Terminal<TestBackend>) {
        let mut terminal = test_terminal_100x40;
        let app = test_app();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_string(&terminal);
        assert!(content.contains("lazydash"));
        assert!(content.contains("CSPM Executive Dashboard"));
        assert!(content.contains("Cloud Accounts"));
        assert!(content.contains("q:Quit"));
    }

    #[rstest]
    fn test_form_popup_overlays_dashboard(test_terminal_100x40: Terminal<TestBackend>) {
        let mut terminal = test_terminal_100x40;
        let mut app = test_app();
        app.update(Action::OpenWidgetForm).unwrap();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_string(&terminal);
        assert!(content.contains("Add Widget"));
    }
}
