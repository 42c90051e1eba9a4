//! Help popup: keyboard reference.

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

/// Key bindings shown in the help popup, as (key, description) pairs.
const BINDINGS: &[(&str, &str)] = &[
    ("/", "Focus the search bar"),
    ("t", "Cycle the time filter"),
    ("Tab / Shift+Tab", "Switch category"),
    ("\u{2190} \u{2192} \u{2191} \u{2193}", "Select widget"),
    ("a", "Add a widget to the current category"),
    ("x / Del", "Remove the selected widget"),
    ("c", "Copy the selected widget as JSON"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

// ============================================================================
// Public API
// ============================================================================

/// Renders the keyboard reference popup.
pub fn render(frame: &mut Frame, area: Rect) {
    let height = BINDINGS.len() as u16 + 4;
    let popup_area = centered_popup_area(area, 56, height);

    let popup_block = create_popup_block("Help");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner = popup_block.inner(popup_area);

    let key_style = Style::default()
        .fg(PRIMARY_COLOR)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(format!("{key:>16}"), key_style),
                Span::raw("  "),
                Span::styled(*description, Style::default().fg(MUTED_COLOR)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

// ============================================================================
// Tests
// ============================================================================
