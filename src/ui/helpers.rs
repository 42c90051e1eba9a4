//! UI helper functions for creating styled blocks.
//!
//! This module provides reusable helper functions for creating consistent
//! UI elements with proper styling throughout the lazydash TUI.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled by focus state.
///
/// Focused blocks use double borders and the primary accent; unfocused
/// blocks use rounded borders and muted colors.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {} ", title)
            },
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {} ", title)
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_string;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_blocks_render_their_titles() {
        let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();

        terminal
            .draw(|frame| {
                let area = frame.area();
                let top = ratatui::layout::Rect::new(0, 0, area.width, 3);
                let mid = ratatui::layout::Rect::new(0, 3, area.width, 3);
                let bottom = ratatui::layout::Rect::new(0, 6, area.width, 3);
                frame.render_widget(create_border_block("Focused", true), top);
                frame.render_widget(create_border_block("Plain", false), mid);
                frame.render_widget(create_popup_block("Popup"), bottom);
            })
            .unwrap();

        let content = buffer_string(&terminal);
        assert!(content.contains("● Focused"));
        assert!(content.contains("Plain"));
        assert!(content.contains("Popup"));
    }
}
