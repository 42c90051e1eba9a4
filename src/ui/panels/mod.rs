//! Main content panels: category tabs and the widget card grid.

pub mod widget_card;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Tabs},
};

use crate::domain::Category;
use crate::state::App;
use crate::theme::{FOCUSED_TITLE_STYLE, MUTED_COLOR};
use crate::ui::layout::{CARD_HEIGHT, CARDS_PER_ROW, TABS_HEIGHT};

// ============================================================================
// Panel Rendering
// ============================================================================

/// Renders the category tabs and the selected category's widget grid.
///
/// The grid shows the filtered view; the selection is clamped against it
/// so removals and filter changes never point past the end.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let filtered = app.filtered_view();
    if filtered.is_empty() {
        render_placeholder(frame, area, "No categories in this dashboard.");
        return;
    }

    let (selected_category, selected_widget) = app.clamped_selection(&filtered);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TABS_HEIGHT), Constraint::Min(1)])
        .split(area);

    render_tabs(frame, chunks[0], &filtered, selected_category);
    render_grid(
        frame,
        chunks[1],
        &filtered[selected_category],
        selected_widget,
    );
}

fn render_tabs(frame: &mut Frame, area: Rect, filtered: &[Category], selected: usize) {
    let titles: Vec<Line> = filtered
        .iter()
        .map(|cat| Line::from(format!(" {} ({}) ", cat.name, cat.widgets.len())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(MUTED_COLOR))
        .highlight_style(FOCUSED_TITLE_STYLE);
    frame.render_widget(tabs, area);
}

fn render_grid(frame: &mut Frame, area: Rect, category: &Category, selected: usize) {
    if category.widgets.is_empty() {
        render_placeholder(
            frame,
            area,
            "No widgets match the current filters  (a: add widget)",
        );
        return;
    }

    let per_row = usize::from(CARDS_PER_ROW);
    let card_width = area.width / CARDS_PER_ROW;
    let total_rows = category.widgets.len().div_ceil(per_row);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

    // Scroll the grid just enough to keep the selected card visible.
    let selected_row = selected / per_row;
    let row_offset = selected_row.saturating_sub(visible_rows - 1);

    for (screen_row, grid_row) in (row_offset..total_rows).take(visible_rows).enumerate() {
        for col in 0..per_row {
            let index = grid_row * per_row + col;
            let Some(widget) = category.widgets.get(index) else {
                break;
            };
            let card_area = Rect::new(
                area.x + col as u16 * card_width,
                area.y + screen_row as u16 * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT.min(area.height.saturating_sub(screen_row as u16 * CARD_HEIGHT)),
            );
            if card_area.height < 3 {
                continue;
            }
            widget_card::render(frame, card_area, widget, index == selected);
        }
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    let widget = Paragraph::new(text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(widget, row);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_string, test_app, test_terminal_100x40};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::*;

    #[rstest]
    fn test_tabs_show_all_categories_with_counts(test_terminal_100x40: Terminal<TestBackend>) {
        let mut terminal = test_terminal_100x40;
        let app = test_app();

        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_string(&terminal);
        assert!(content.contains("CSPM Executive Dashboard (4)"));
        assert!(content.contains("CWPP Dashboard (4)"));
        assert!(content.contains("Risk Dashboard (4)"));
    }

    #[rstest]
    fn test_grid_renders_selected_category_widgets(test_terminal_100x40: Terminal<TestBackend>) {
        let mut terminal = test_terminal_100x40;
        let app = test_app();

        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_string(&terminal);
        assert!(content.contains("Cloud Accounts"));
        assert!(content.contains("IAM Policies"));
    }

    #[rstest]
    fn test_grid_placeholder_when_nothing_matches(test_terminal_100x40: Terminal<TestBackend>) {
        let mut terminal = test_terminal_100x40;
        let mut app = test_app();
        app.search_input = "zzz-no-match".to_string();

        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_string(&terminal);
        assert!(content.contains("No widgets match the current filters"));
        // Tabs stay, with zero counts.
        assert!(content.contains("CSPM Executive Dashboard (0)"));
    }
}
