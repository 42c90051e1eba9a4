//! Widget types for the lazydash dashboard.
//!
//! A widget is a single visual unit with a type-specific payload. The
//! payload is modelled as a sum type ([`WidgetKind`]) tagged by `type` in
//! the persisted form, so invalid field combinations cannot be represented.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Widget Id
// ============================================================================

/// Opaque unique widget identifier.
///
/// Generated once at creation and stable for the widget's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(Uuid);

impl WidgetId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Data Point
// ============================================================================

/// A single labeled numeric entry in a chart widget's payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Entry label (category axis / slice label).
    pub name: String,
    /// Entry value.
    pub value: f64,
}

impl DataPoint {
    /// Creates a new data point.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

// ============================================================================
// Widget Kind
// ============================================================================

/// Type-specific widget payload, discriminated by the `type` tag.
///
/// Chart variants carry an ordered series of [`DataPoint`]s; `Stat` and
/// `Empty` carry their own scalar fields. The `Unknown` variant is a
/// deserialization catch-all for unrecognized tags in persisted data, so a
/// single hand-edited widget cannot invalidate the whole store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WidgetKind {
    /// Proportional slices, one color per entry.
    Pie {
        /// Slice entries in display order.
        data: Vec<DataPoint>,
    },
    /// Vertical bars, one per entry.
    Bar {
        /// Bar entries in display order.
        data: Vec<DataPoint>,
    },
    /// A single polyline over the entries in order.
    Line {
        /// Points in display order; the x axis is ordinal.
        data: Vec<DataPoint>,
    },
    /// A single horizontal 100%-stacked bar.
    RiskBar {
        /// Segment entries in display order.
        data: Vec<DataPoint>,
    },
    /// A plain value with a description, no computation.
    Stat {
        /// The displayed value.
        value: f64,
        /// The displayed description.
        description: String,
    },
    /// A "no data" placeholder with a message.
    Empty {
        /// The displayed message.
        message: String,
    },
    /// Catch-all for unrecognized `type` tags in persisted data.
    #[serde(other)]
    Unknown,
}

impl WidgetKind {
    /// Returns the `type` tag string for this payload.
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Pie { .. } => "pie",
            Self::Bar { .. } => "bar",
            Self::Line { .. } => "line",
            Self::RiskBar { .. } => "riskbar",
            Self::Stat { .. } => "stat",
            Self::Empty { .. } => "empty",
            Self::Unknown => "unknown",
        }
    }

}

// ============================================================================
// Widget
// ============================================================================

/// A single dashboard widget.
///
/// Common fields live here; everything type-specific is in [`WidgetKind`],
/// which serializes inline so the persisted shape is
/// `{id, type, name, timestamp, ...payload}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Unique identifier, stable for the widget's lifetime.
    pub id: WidgetId,
    /// Display name, also the target of text search.
    pub name: String,
    /// Creation time in milliseconds since the epoch. Used only for
    /// filtering, never updated.
    pub timestamp: i64,
    /// Type-specific payload.
    #[serde(flatten)]
    pub kind: WidgetKind,
}

impl Widget {
    /// Creates a widget with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, timestamp: i64, kind: WidgetKind) -> Self {
        Self {
            id: WidgetId::new(),
            name: name.into(),
            timestamp,
            kind,
        }
    }

    /// Case-insensitive substring match against the widget name.
    ///
    /// An empty search matches everything.
    #[must_use]
    pub fn matches_search(&self, search: &str) -> bool {
        search.is_empty() || self.name.to_lowercase().contains(&search.to_lowercase())
    }

    /// Creation time formatted for display in the local timezone.
    #[must_use]
    pub fn created_display(&self) -> String {
        Local
            .timestamp_millis_opt(self.timestamp)
            .single()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_widget_serializes_with_inline_type_tag() {
        let widget = Widget::new(
            "Compliance Issues",
            1_700_000_000_000,
            WidgetKind::Bar {
                data: vec![DataPoint::new("PCI", 7.0), DataPoint::new("HIPAA", 5.0)],
            },
        );

        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["name"], "Compliance Issues");
        assert_eq!(json["timestamp"], 1_700_000_000_000_i64);
        assert_eq!(json["data"][0]["name"], "PCI");
        assert_eq!(json["data"][0]["value"], 7.0);
        // Payload fields are flattened, not nested under a variant key.
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_widget_roundtrip() {
        let widget = Widget::new(
            "IAM Policies",
            1_700_000_000_000,
            WidgetKind::Stat {
                value: 104.0,
                description: "Total IAM Policies".to_string(),
            },
        );

        let json = serde_json::to_string(&widget).unwrap();
        let back: Widget = serde_json::from_str(&json).unwrap();
        assert_eq!(widget, back);
    }

    #[test]
    fn test_unknown_type_tag_deserializes_to_unknown() {
        let json = r#"{
            "id": "b96ec7a5-44f2-4d22-8c4f-bbdc5cd37a7b",
            "type": "gauge",
            "name": "Mystery",
            "timestamp": 1700000000000
        }"#;

        let widget: Widget = serde_json::from_str(json).unwrap();
        assert_eq!(widget.kind, WidgetKind::Unknown);
        assert_eq!(widget.name, "Mystery");
    }

    #[rstest]
    #[case::pie(WidgetKind::Pie { data: Vec::new() }, "pie")]
    #[case::bar(WidgetKind::Bar { data: Vec::new() }, "bar")]
    #[case::line(WidgetKind::Line { data: Vec::new() }, "line")]
    #[case::riskbar(WidgetKind::RiskBar { data: Vec::new() }, "riskbar")]
    #[case::stat(WidgetKind::Stat { value: 0.0, description: String::new() }, "stat")]
    #[case::empty(WidgetKind::Empty { message: String::new() }, "empty")]
    fn test_type_tags_match_serialized_form(#[case] kind: WidgetKind, #[case] tag: &str) {
        assert_eq!(kind.type_tag(), tag);

        let widget = Widget::new("w", 0, kind);
        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(json["type"], tag);
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let widget = Widget::new(
            "Risk Severity Overview",
            0,
            WidgetKind::Empty {
                message: String::new(),
            },
        );

        assert!(widget.matches_search(""));
        assert!(widget.matches_search("risk"));
        assert!(widget.matches_search("SEVERITY"));
        assert!(widget.matches_search("Overview"));
        assert!(!widget.matches_search("compliance"));
    }

    #[test]
    fn test_widget_ids_are_unique() {
        let a = WidgetId::new();
        let b = WidgetId::new();
        assert_ne!(a, b);
    }
}
