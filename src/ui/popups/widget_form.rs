//! Add-widget form popup.
//!
//! This popup lets users build a new widget: pick a type, name it, and
//! fill the type-specific inputs (chart rows, stat value/description, or
//! empty message) using built-in Ratatui widgets.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::form::{FormField, FormWidgetType, WidgetForm};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Form Rendering
// ============================================================================

/// Render the add-widget form.
pub fn render(frame: &mut Frame, area: Rect, form: &WidgetForm, error: Option<&str>) {
    // Type and name are always present; the body rows depend on the type.
    let body_fields: u16 = if form.widget_type.is_chart() {
        form.rows.len() as u16
    } else if form.widget_type == FormWidgetType::Stat {
        2
    } else {
        1
    };
    let height = 2 + (2 + body_fields) * 3 + 1 + 2;

    let popup_area = centered_popup_area(area, 64, height);
    let popup_block = create_popup_block("Add Widget");

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner = popup_block.inner(popup_area);

    let mut constraints = vec![Constraint::Length(3); usize::from(2 + body_fields)];
    constraints.push(Constraint::Length(1)); // error line
    constraints.push(Constraint::Length(2)); // help
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    render_field(
        frame,
        rows[0],
        "Type (\u{2190}/\u{2192})",
        form.widget_type.label(),
        form.active_field == FormField::Type,
        "",
    );
    render_field(
        frame,
        rows[1],
        "Name",
        &form.name,
        form.active_field == FormField::Name,
        "<optional>",
    );

    let mut next_row = 2;
    if form.widget_type.is_chart() {
        for (index, row) in form.rows.iter().enumerate() {
            render_data_row(frame, rows[next_row], form, index, &row.label, &row.value);
            next_row += 1;
        }
    } else if form.widget_type == FormWidgetType::Stat {
        render_field(
            frame,
            rows[next_row],
            "Value",
            &form.value,
            form.active_field == FormField::Value,
            "0",
        );
        render_field(
            frame,
            rows[next_row + 1],
            "Description",
            &form.description,
            form.active_field == FormField::Description,
            "<optional>",
        );
        next_row += 2;
    } else {
        render_field(
            frame,
            rows[next_row],
            "Message",
            &form.message,
            form.active_field == FormField::Message,
            "<optional>",
        );
        next_row += 1;
    }

    if let Some(error) = error {
        let error_widget = Paragraph::new(error)
            .style(Style::default().fg(ERROR_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, rows[next_row]);
    }

    let help_text = if form.widget_type.is_chart() {
        "Enter: Add  Ctrl+R: Add Row  Tab/Down: Next  Up: Prev  Esc: Cancel"
    } else {
        "Enter: Add  Tab/Down: Next  Up: Prev  Esc: Cancel"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[next_row + 1]);
}

/// Renders one label/value chart row as a side-by-side field pair.
fn render_data_row(
    frame: &mut Frame,
    area: Rect,
    form: &WidgetForm,
    index: usize,
    label: &str,
    value: &str,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_field(
        frame,
        halves[0],
        &format!("Row {} Label", index + 1),
        label,
        form.active_field == FormField::RowLabel(index),
        "Label",
    );
    render_field(
        frame,
        halves[1],
        &format!("Row {} Value", index + 1),
        value,
        form.active_field == FormField::RowValue(index),
        "0",
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    placeholder: &str,
) {
    let border_style = if is_active {
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_COLOR)
    };

    let display = if value.is_empty() { placeholder } else { value };
    let content = if is_active {
        format!("{display}_")
    } else {
        display.to_string()
    };

    let paragraph = Paragraph::new(content)
        .style(if value.is_empty() {
            Style::default().fg(MUTED_COLOR)
        } else {
            Style::default()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(label.to_string()),
        );

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests
// ============================================================================
