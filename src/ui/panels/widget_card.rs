//! Widget card rendering.
//!
//! Draws one widget as a bordered card: the name in the title, the
//! creation time in the bottom border, and the body dispatched on the
//! widget's visual description. Pie and risk bars are drawn with colored
//! proportional block runs, bars with ratatui's `BarChart`, lines with a
//! `Chart` over ordinal x positions.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph},
};

use crate::domain::{DataPoint, Widget};
use crate::render::{Segment, WidgetVisual, format_value, visual};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, palette_color};
use crate::ui::helpers::create_border_block;

// ============================================================================
// Card Rendering
// ============================================================================

/// Renders one widget card.
pub fn render(frame: &mut Frame, area: Rect, widget: &Widget, selected: bool) {
    let block = create_border_block(&widget.name, selected).title_bottom(
        Line::from(Span::styled(
            format!(" {} ", widget.created_display()),
            Style::default().fg(MUTED_COLOR),
        ))
        .right_aligned(),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height < 2 {
        return;
    }

    match visual(widget) {
        WidgetVisual::Pie { slices } => render_pie(frame, inner, &slices),
        WidgetVisual::Bars { bars } => render_bars(frame, inner, &bars),
        WidgetVisual::Line { points } => render_line(frame, inner, &points),
        WidgetVisual::RiskBar { segments } => render_riskbar(frame, inner, &segments),
        WidgetVisual::Stat { value, description } => {
            render_stat(frame, inner, value, &description);
        }
        WidgetVisual::Empty { message } => render_centered(frame, inner, &message, MUTED_COLOR),
        WidgetVisual::Unsupported => {
            render_centered(frame, inner, "Unsupported widget type", ERROR_COLOR);
        }
    }
}

// ============================================================================
// Chart Bodies
// ============================================================================

fn render_pie(frame: &mut Frame, area: Rect, slices: &[Segment]) {
    if slices.is_empty() {
        render_centered(frame, area, "(no data)", MUTED_COLOR);
        return;
    }

    let label_width = slices
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0)
        .min(14);
    let bar_width = usize::from(area.width).saturating_sub(label_width + 12);

    let lines: Vec<Line> = slices
        .iter()
        .map(|slice| {
            let filled = (slice.fraction * bar_width as f64).round() as usize;
            Line::from(vec![
                Span::styled("\u{25a0} ", Style::default().fg(slice.color)),
                Span::raw(format!("{:<label_width$.label_width$} ", slice.label)),
                Span::styled("\u{2588}".repeat(filled), Style::default().fg(slice.color)),
                Span::styled(
                    format!(" {} ({:.0}%)", format_value(slice.value), slice.fraction * 100.0),
                    Style::default().fg(MUTED_COLOR),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_bars(frame: &mut Frame, area: Rect, data: &[DataPoint]) {
    if data.is_empty() {
        render_centered(frame, area, "(no data)", MUTED_COLOR);
        return;
    }

    let count = data.len() as u16;
    let bar_width = (area.width.saturating_sub(count) / count).clamp(3, 9);

    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let color = palette_color(index);
            Bar::default()
                .value(point.value.max(0.0).round() as u64)
                .text_value(format_value(point.value))
                .label(Line::from(point.name.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(color).add_modifier(Modifier::REVERSED))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

fn render_line(frame: &mut Frame, area: Rect, points: &[(String, f64)]) {
    if points.is_empty() {
        render_centered(frame, area, "(no data)", MUTED_COLOR);
        return;
    }

    let series: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(index, (_, value))| (index as f64, *value))
        .collect();

    let max_x = (points.len().saturating_sub(1)).max(1) as f64;
    let max_y = points
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let min_y = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::min);

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(PRIMARY_COLOR))
        .data(&series);

    // First and last entry names anchor the ordinal x axis.
    let x_labels: Vec<Span> = vec![
        Span::styled(points[0].0.clone(), Style::default().fg(MUTED_COLOR)),
        Span::styled(
            points[points.len() - 1].0.clone(),
            Style::default().fg(MUTED_COLOR),
        ),
    ];
    let y_labels: Vec<Span> = vec![
        Span::styled(format_value(min_y), Style::default().fg(MUTED_COLOR)),
        Span::styled(format_value(max_y), Style::default().fg(MUTED_COLOR)),
    ];

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .style(Style::default().fg(MUTED_COLOR))
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(MUTED_COLOR))
                .bounds([min_y, max_y])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

fn render_riskbar(frame: &mut Frame, area: Rect, segments: &[Segment]) {
    let total_width = usize::from(area.width);
    if segments.is_empty() || segments.iter().all(|s| s.fraction == 0.0) {
        render_centered(frame, area, "(no data)", MUTED_COLOR);
        return;
    }

    // Distribute the row width by fraction; the last visible segment
    // absorbs the rounding remainder so the bar always spans the card.
    let mut widths: Vec<usize> = segments
        .iter()
        .map(|s| (s.fraction * total_width as f64).round() as usize)
        .collect();
    let assigned: usize = widths.iter().sum();
    if let Some(last) = widths.iter_mut().rev().find(|w| **w > 0) {
        *last = (*last + total_width).saturating_sub(assigned).max(1);
    }

    let bar = Line::from(
        segments
            .iter()
            .zip(&widths)
            .map(|(segment, width)| {
                Span::styled("\u{2588}".repeat(*width), Style::default().fg(segment.color))
            })
            .collect::<Vec<_>>(),
    );

    let mut lines = vec![bar, Line::default()];
    lines.extend(segments.iter().map(|segment| {
        Line::from(vec![
            Span::styled("\u{25a0} ", Style::default().fg(segment.color)),
            Span::raw(format!("{} ", segment.label)),
            Span::styled(
                format!(
                    "{:.0}% ({})",
                    segment.fraction * 100.0,
                    format_value(segment.value)
                ),
                Style::default().fg(MUTED_COLOR),
            ),
        ])
    }));

    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// Scalar Bodies
// ============================================================================

fn render_stat(frame: &mut Frame, area: Rect, value: f64, description: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let value_widget = Paragraph::new(format_value(value))
        .style(
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(value_widget, chunks[1]);

    let description_widget = Paragraph::new(description.to_string())
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(description_widget, chunks[2]);
}

fn render_centered(frame: &mut Frame, area: Rect, text: &str, color: ratatui::style::Color) {
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    let widget = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(widget, row);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DataPoint, WidgetKind};
    use crate::test_utils::{WidgetMother, buffer_string};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(widget: &Widget) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), widget, false))
            .unwrap();
        buffer_string(&terminal)
    }

    #[test]
    fn test_pie_card_shows_slice_labels_and_percentages() {
        let content = draw(&WidgetMother::pie("Cloud Accounts", 0));

        assert!(content.contains("Cloud Accounts"));
        assert!(content.contains("Connected"));
        assert!(content.contains("(50%)"));
    }

    #[test]
    fn test_bar_card_shows_entry_labels() {
        let widget = Widget::new(
            "Compliance Issues",
            0,
            WidgetKind::Bar {
                data: vec![
                    DataPoint::new("PCI", 7.0),
                    DataPoint::new("HIPAA", 5.0),
                    DataPoint::new("ISO", 3.0),
                ],
            },
        );
        let content = draw(&widget);

        for label in ["PCI", "HIPAA", "ISO"] {
            assert!(content.contains(label), "missing bar label {label}");
        }
    }

    #[test]
    fn test_line_card_shows_axis_anchor_labels() {
        let widget = Widget::new(
            "Risk Trends",
            0,
            WidgetKind::Line {
                data: vec![
                    DataPoint::new("Jan", 10.0),
                    DataPoint::new("Feb", 20.0),
                    DataPoint::new("Mar", 15.0),
                ],
            },
        );
        let content = draw(&widget);

        assert!(content.contains("Jan"));
        assert!(content.contains("Mar"));
    }

    #[test]
    fn test_riskbar_card_shows_normalized_percentages() {
        let widget = WidgetMother::riskbar(
            "Risk Severity Overview",
            0,
            vec![DataPoint::new("A", 1.0), DataPoint::new("B", 3.0)],
        );
        let content = draw(&widget);

        assert!(content.contains("25% (1)"));
        assert!(content.contains("75% (3)"));
    }

    #[test]
    fn test_stat_card_shows_value_and_description() {
        let widget = Widget::new(
            "IAM Policies",
            0,
            WidgetKind::Stat {
                value: 104.0,
                description: "Total IAM Policies".to_string(),
            },
        );
        let content = draw(&widget);

        assert!(content.contains("104"));
        assert!(content.contains("Total IAM Policies"));
    }

    #[test]
    fn test_empty_card_shows_message_verbatim() {
        let widget = Widget::new(
            "CWPP Vulnerabilities",
            0,
            WidgetKind::Empty {
                message: "No Graph data available".to_string(),
            },
        );
        let content = draw(&widget);

        assert!(content.contains("No Graph data available"));
    }

    #[test]
    fn test_unknown_card_shows_visible_fallback() {
        let widget = Widget::new("Mystery", 0, WidgetKind::Unknown);
        let content = draw(&widget);

        assert!(content.contains("Unsupported widget type"));
    }

    #[test]
    fn test_chart_with_no_rows_shows_placeholder() {
        let widget = Widget::new("Empty Pie", 0, WidgetKind::Pie { data: Vec::new() });
        let content = draw(&widget);

        assert!(content.contains("(no data)"));
    }
}
