//! Message/notification popup rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::MUTED_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Public API
// ============================================================================

/// Renders a centered message popup, dismissed with Esc or Enter.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let width = 56;
    // One row per wrapped text line plus borders and the help line.
    let text_rows = (message.chars().count() as u16 / (width - 4)) + 1;
    let popup_area = centered_popup_area(area, width, text_rows + 4);

    let popup_block = create_popup_block("Message");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner = popup_block.inner(popup_area);
    let message_widget = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    frame.render_widget(
        message_widget,
        Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1)),
    );

    let help = Paragraph::new("Esc/Enter: Close")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(
        help,
        Rect::new(
            popup_area.x,
            popup_area.y + popup_area.height.saturating_sub(2),
            popup_area.width,
            1,
        ),
    );
}

// ============================================================================
// Tests
// ============================================================================
