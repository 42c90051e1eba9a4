//! Header rendering: app title, inline search bar, and time filter.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_border_block;

// ============================================================================
// Header Rendering
// ============================================================================

/// Renders the header bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(20),
            Constraint::Length(22),
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_search(frame, chunks[1], app);
    render_time_filter(frame, chunks[2], app);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("lazydash")
        .style(
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(create_border_block("", false));
    frame.render_widget(title, area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let content = if app.search_focused {
        format!("{}_", app.search_input)
    } else if app.search_input.is_empty() {
        "Search widgets... (/)".to_string()
    } else {
        app.search_input.clone()
    };

    let style = if app.search_input.is_empty() && !app.search_focused {
        Style::default().fg(MUTED_COLOR)
    } else {
        Style::default()
    };

    let search = Paragraph::new(content)
        .style(style)
        .block(create_border_block("Search", app.search_focused));
    frame.render_widget(search, area);
}

fn render_time_filter(frame: &mut Frame, area: Rect, app: &App) {
    let filter = Paragraph::new(app.time_filter.as_str())
        .alignment(Alignment::Center)
        .block(create_border_block("Time (t)", false));
    frame.render_widget(filter, area);
}

// ============================================================================
// Tests
// ============================================================================
