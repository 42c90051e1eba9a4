//! Widget form state.
//!
//! The form holds the transient editable draft used to construct a new
//! widget before committing it to the store: a widget type, a name, and
//! the type-specific inputs (chart rows, stat value/description, empty
//! message), all kept as raw text while editing.
//!
//! Committing applies the defaulting rules and an explicit
//! parse-and-validate step for numeric inputs; invalid numbers are
//! returned as errors, never stored.

use crate::constants::{DEFAULT_EMPTY_MESSAGE, DEFAULT_STAT_DESCRIPTION};
use crate::domain::{DashboardError, DataPoint, Widget, WidgetKind};

// ============================================================================
// Widget Type Choice
// ============================================================================

/// The widget type selected in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormWidgetType {
    /// Pie chart.
    #[default]
    Pie,
    /// Bar chart.
    Bar,
    /// Line chart.
    Line,
    /// Risk bar (100%-stacked horizontal bar).
    RiskBar,
    /// Stat card.
    Stat,
    /// Empty placeholder.
    Empty,
}

impl FormWidgetType {
    /// Returns the type tag used in widget names and persisted data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::RiskBar => "riskbar",
            Self::Stat => "stat",
            Self::Empty => "empty",
        }
    }

    /// Returns the display label for the type selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pie => "Pie",
            Self::Bar => "Bar",
            Self::Line => "Line",
            Self::RiskBar => "Risk Bar",
            Self::Stat => "Stat",
            Self::Empty => "Empty",
        }
    }

    /// Cycles to the next type.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Pie => Self::Bar,
            Self::Bar => Self::Line,
            Self::Line => Self::RiskBar,
            Self::RiskBar => Self::Stat,
            Self::Stat => Self::Empty,
            Self::Empty => Self::Pie,
        }
    }

    /// Cycles to the previous type.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Pie => Self::Empty,
            Self::Bar => Self::Pie,
            Self::Line => Self::Bar,
            Self::RiskBar => Self::Line,
            Self::Stat => Self::RiskBar,
            Self::Empty => Self::Stat,
        }
    }

    /// Whether this type carries chart rows.
    #[must_use]
    pub const fn is_chart(self) -> bool {
        matches!(self, Self::Pie | Self::Bar | Self::Line | Self::RiskBar)
    }
}

// ============================================================================
// Form Fields
// ============================================================================

/// Fields available in the widget form.
///
/// Which fields exist depends on the selected widget type; chart rows are
/// addressed by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// The widget type selector.
    Type,
    /// The widget name.
    Name,
    /// Label input of chart row `n`.
    RowLabel(usize),
    /// Value input of chart row `n`.
    RowValue(usize),
    /// Stat value input.
    Value,
    /// Stat description input.
    Description,
    /// Empty-widget message input.
    Message,
}

// ============================================================================
// Row Draft
// ============================================================================

/// One editable chart row: a label and a raw value string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowDraft {
    /// Entry label text.
    pub label: String,
    /// Raw value text, validated at commit.
    pub value: String,
}

// ============================================================================
// Widget Form
// ============================================================================

/// State for the add-widget form popup.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetForm {
    /// Index of the category the widget will be appended to.
    pub category_index: usize,
    /// Selected widget type.
    pub widget_type: FormWidgetType,
    /// Widget name input.
    pub name: String,
    /// Chart rows (used by chart types only).
    pub rows: Vec<RowDraft>,
    /// Stat value input.
    pub value: String,
    /// Stat description input.
    pub description: String,
    /// Empty-widget message input.
    pub message: String,
    /// The field currently receiving input.
    pub active_field: FormField,
}

impl WidgetForm {
    /// Creates a fresh draft targeting the given category.
    #[must_use]
    pub fn new(category_index: usize) -> Self {
        Self {
            category_index,
            widget_type: FormWidgetType::default(),
            name: String::new(),
            rows: vec![RowDraft::default()],
            value: String::new(),
            description: String::new(),
            message: String::new(),
            active_field: FormField::Type,
        }
    }

    /// Returns the fields of the form for the current type, in order.
    #[must_use]
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::Type, FormField::Name];
        match self.widget_type {
            t if t.is_chart() => {
                for i in 0..self.rows.len() {
                    fields.push(FormField::RowLabel(i));
                    fields.push(FormField::RowValue(i));
                }
            }
            FormWidgetType::Stat => {
                fields.push(FormField::Value);
                fields.push(FormField::Description);
            }
            FormWidgetType::Empty => fields.push(FormField::Message),
            _ => unreachable!("chart types handled by guard"),
        }
        fields
    }

    /// Moves focus to the next field, wrapping around.
    pub fn next_field(&mut self) {
        let fields = self.fields();
        let pos = fields
            .iter()
            .position(|f| *f == self.active_field)
            .unwrap_or(0);
        self.active_field = fields[(pos + 1) % fields.len()];
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn prev_field(&mut self) {
        let fields = self.fields();
        let pos = fields
            .iter()
            .position(|f| *f == self.active_field)
            .unwrap_or(0);
        self.active_field = fields[(pos + fields.len() - 1) % fields.len()];
    }

    /// Cycles the widget type forward (only while the type field is active).
    pub fn cycle_type_next(&mut self) {
        if self.active_field == FormField::Type {
            self.widget_type = self.widget_type.next();
        }
    }

    /// Cycles the widget type backward (only while the type field is active).
    pub fn cycle_type_prev(&mut self) {
        if self.active_field == FormField::Type {
            self.widget_type = self.widget_type.prev();
        }
    }

    /// Appends an empty chart row and focuses its label input.
    ///
    /// No-op for non-chart types.
    pub fn add_row(&mut self) {
        if self.widget_type.is_chart() {
            self.rows.push(RowDraft::default());
            self.active_field = FormField::RowLabel(self.rows.len() - 1);
        }
    }

    /// Appends a character to the active text field.
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active_text_mut() {
            field.push(c);
        }
    }

    /// Removes the last character of the active text field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_text_mut() {
            field.pop();
        }
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            FormField::Type => None,
            FormField::Name => Some(&mut self.name),
            FormField::RowLabel(i) => self.rows.get_mut(i).map(|r| &mut r.label),
            FormField::RowValue(i) => self.rows.get_mut(i).map(|r| &mut r.value),
            FormField::Value => Some(&mut self.value),
            FormField::Description => Some(&mut self.description),
            FormField::Message => Some(&mut self.message),
        }
    }

    /// Builds a widget from the draft.
    ///
    /// Defaulting rules: a blank name becomes `"New <type> Widget"`; a
    /// blank stat value becomes `0`; blank stat description and empty
    /// message get their standard placeholders. Chart rows that are
    /// entirely blank are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidNumber`] if a non-blank chart row
    /// or the stat value does not parse as a finite number.
    pub fn commit(&self, now_ms: i64) -> Result<Widget, DashboardError> {
        let name = if self.name.trim().is_empty() {
            format!("New {} Widget", self.widget_type.as_str())
        } else {
            self.name.trim().to_string()
        };

        let kind = match self.widget_type {
            FormWidgetType::Pie => WidgetKind::Pie {
                data: self.chart_data()?,
            },
            FormWidgetType::Bar => WidgetKind::Bar {
                data: self.chart_data()?,
            },
            FormWidgetType::Line => WidgetKind::Line {
                data: self.chart_data()?,
            },
            FormWidgetType::RiskBar => WidgetKind::RiskBar {
                data: self.chart_data()?,
            },
            FormWidgetType::Stat => {
                let raw = self.value.trim();
                let value = if raw.is_empty() {
                    0.0
                } else {
                    parse_number("Value", raw)?
                };
                let description = if self.description.trim().is_empty() {
                    DEFAULT_STAT_DESCRIPTION.to_string()
                } else {
                    self.description.trim().to_string()
                };
                WidgetKind::Stat { value, description }
            }
            FormWidgetType::Empty => {
                let message = if self.message.trim().is_empty() {
                    DEFAULT_EMPTY_MESSAGE.to_string()
                } else {
                    self.message.trim().to_string()
                };
                WidgetKind::Empty { message }
            }
        };

        Ok(Widget::new(name, now_ms, kind))
    }

    fn chart_data(&self) -> Result<Vec<DataPoint>, DashboardError> {
        let mut data = Vec::new();
        for row in &self.rows {
            let label = row.label.trim();
            let raw = row.value.trim();
            if label.is_empty() && raw.is_empty() {
                continue;
            }
            let value = parse_number(label, raw)?;
            data.push(DataPoint::new(label, value));
        }
        Ok(data)
    }
}

/// Parses a raw value string into a finite number.
fn parse_number(label: &str, raw: &str) -> Result<f64, DashboardError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DashboardError::invalid_number(label, raw))
}

// ============================================================================
// Tests
// ============================================================================
