//! Confirmation popups for removing widgets and quitting.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Public API
// ============================================================================

/// Renders the remove-widget confirmation popup.
pub fn render_remove(frame: &mut Frame, area: Rect, widget_name: &str) {
    render_confirm(
        frame,
        area,
        "Confirm Remove",
        &format!("Remove widget '{widget_name}'?"),
    );
}

/// Renders the quit confirmation popup.
pub fn render_quit(frame: &mut Frame, area: Rect) {
    render_confirm(
        frame,
        area,
        "Confirm Quit",
        "Are you sure you want to close lazydash?",
    );
}

fn render_confirm(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let popup_area = centered_popup_area(area, 54, 7);

    let popup_block = create_popup_block(title);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner = popup_block.inner(popup_area);

    let message_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
    let message_widget = Paragraph::new(message)
        .style(Style::default())
        .alignment(Alignment::Center);
    frame.render_widget(message_widget, message_area);

    let key_style = Style::default()
        .fg(PRIMARY_COLOR)
        .add_modifier(Modifier::BOLD);
    let help_text = Line::from(vec![
        Span::styled("y", key_style),
        Span::styled("/", Style::default().fg(MUTED_COLOR)),
        Span::styled("Enter", key_style),
        Span::styled(":Yes  ", Style::default().fg(MUTED_COLOR)),
        Span::styled("n", key_style),
        Span::styled("/", Style::default().fg(MUTED_COLOR)),
        Span::styled("Esc", key_style),
        Span::styled(":No", Style::default().fg(MUTED_COLOR)),
    ]);

    let help_area = Rect::new(
        popup_area.x,
        popup_area.y + popup_area.height.saturating_sub(2),
        popup_area.width,
        1,
    );
    frame.render_widget(Paragraph::new(help_text).alignment(Alignment::Center), help_area);
}

// ============================================================================
// Tests
// ============================================================================
