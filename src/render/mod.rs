//! Pure widget-to-visual mapping.
//!
//! [`visual`] turns a widget into a [`WidgetVisual`], the drawable
//! description the UI layer consumes: proportional slices for pies,
//! bars, ordinal polyline points, normalized segments for risk bars, and
//! verbatim stat/empty content. The mapping is a total function: every
//! widget kind, including the unknown catch-all, produces a visible
//! visual. No terminal types are involved, so the mapping is testable on
//! its own.

use ratatui::style::Color;

use crate::domain::{DataPoint, Widget, WidgetKind};
use crate::theme::palette_color;

// ============================================================================
// Visual Types
// ============================================================================

/// One proportional entry of a pie or risk bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Entry label.
    pub label: String,
    /// Original entry value.
    pub value: f64,
    /// Share of the widget total in `[0, 1]`; `0` when the total is not
    /// positive.
    pub fraction: f64,
    /// Palette color assigned by entry index.
    pub color: Color,
}

/// Drawable description of a widget, produced by [`visual`].
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetVisual {
    /// Proportional slices with labels and palette colors.
    Pie {
        /// Slices in entry order.
        slices: Vec<Segment>,
    },
    /// Vertical bars, one per entry.
    Bars {
        /// Bars in entry order.
        bars: Vec<DataPoint>,
    },
    /// A single polyline over ordinal x positions.
    Line {
        /// `(label, value)` points in entry order.
        points: Vec<(String, f64)>,
    },
    /// A single horizontal 100%-stacked bar.
    RiskBar {
        /// Segments in entry order, widths normalized by the widget total.
        segments: Vec<Segment>,
    },
    /// A plain value with a description.
    Stat {
        /// The displayed value.
        value: f64,
        /// The displayed description.
        description: String,
    },
    /// A "no data" placeholder.
    Empty {
        /// The displayed message.
        message: String,
    },
    /// Fallback for unrecognized widget types.
    Unsupported,
}

// ============================================================================
// Visual Mapping
// ============================================================================

/// Maps a widget to its drawable description.
///
/// Dispatches exhaustively on the widget kind; unrecognized kinds map to
/// [`WidgetVisual::Unsupported`] rather than disappearing.
#[must_use]
pub fn visual(widget: &Widget) -> WidgetVisual {
    match &widget.kind {
        WidgetKind::Pie { data } => WidgetVisual::Pie {
            slices: proportional(data),
        },
        WidgetKind::Bar { data } => WidgetVisual::Bars { bars: data.clone() },
        WidgetKind::Line { data } => WidgetVisual::Line {
            points: data.iter().map(|d| (d.name.clone(), d.value)).collect(),
        },
        WidgetKind::RiskBar { data } => WidgetVisual::RiskBar {
            segments: proportional(data),
        },
        WidgetKind::Stat { value, description } => WidgetVisual::Stat {
            value: *value,
            description: description.clone(),
        },
        WidgetKind::Empty { message } => WidgetVisual::Empty {
            message: message.clone(),
        },
        WidgetKind::Unknown => WidgetVisual::Unsupported,
    }
}

/// Normalizes entries by the sum of the widget's own values.
///
/// Entries that are not positive finite numbers contribute nothing to the
/// total and get a zero fraction.
fn proportional(data: &[DataPoint]) -> Vec<Segment> {
    let total: f64 = data
        .iter()
        .map(|d| d.value)
        .filter(|v| v.is_finite() && *v > 0.0)
        .sum();

    data.iter()
        .enumerate()
        .map(|(index, d)| Segment {
            label: d.name.clone(),
            value: d.value,
            fraction: if total > 0.0 && d.value.is_finite() && d.value > 0.0 {
                d.value / total
            } else {
                0.0
            },
            color: palette_color(index),
        })
        .collect()
}

/// Formats a value for display, dropping a redundant fractional part.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

// ============================================================================
// Tests
// ============================================================================
