//! Built-in seed dashboard.
//!
//! The seed is used on first launch and whenever the persisted store is
//! missing or unreadable. Three categories, four widgets each, covering
//! every widget type at least once.

use crate::domain::{Category, DataPoint, Widget, WidgetKind};

// ============================================================================
// Seed Dataset
// ============================================================================

/// Builds the seed category list.
///
/// Widget ids are freshly generated and every widget's `timestamp` is set
/// to `now_ms`, mirroring creation at first launch.
#[must_use]
pub fn seed_categories(now_ms: i64) -> Vec<Category> {
    vec![
        Category::with_widgets(
            "CSPM Executive Dashboard",
            vec![
                Widget::new(
                    "Cloud Accounts",
                    now_ms,
                    WidgetKind::Pie {
                        data: vec![
                            DataPoint::new("Connected", 2.0),
                            DataPoint::new("Not Connected", 2.0),
                            DataPoint::new("Partial", 4.0),
                        ],
                    },
                ),
                Widget::new(
                    "IAM Policies",
                    now_ms,
                    WidgetKind::Stat {
                        value: 104.0,
                        description: "Total IAM Policies".to_string(),
                    },
                ),
                Widget::new(
                    "Compliance Issues",
                    now_ms,
                    WidgetKind::Bar {
                        data: vec![
                            DataPoint::new("PCI", 7.0),
                            DataPoint::new("HIPAA", 5.0),
                            DataPoint::new("ISO", 3.0),
                        ],
                    },
                ),
                Widget::new(
                    "Cloud Usage Over Time",
                    now_ms,
                    WidgetKind::Line {
                        data: vec![
                            DataPoint::new("Week 1", 20.0),
                            DataPoint::new("Week 2", 25.0),
                            DataPoint::new("Week 3", 30.0),
                        ],
                    },
                ),
            ],
        ),
        Category::with_widgets(
            "CWPP Dashboard",
            vec![
                Widget::new(
                    "Top 5 Namespace Alerts",
                    now_ms,
                    WidgetKind::Bar {
                        data: vec![
                            DataPoint::new("A", 5.0),
                            DataPoint::new("B", 3.0),
                            DataPoint::new("C", 4.0),
                        ],
                    },
                ),
                Widget::new(
                    "CWPP Vulnerabilities",
                    now_ms,
                    WidgetKind::Empty {
                        message: "No Graph data available".to_string(),
                    },
                ),
                Widget::new(
                    "Agent Status",
                    now_ms,
                    WidgetKind::Pie {
                        data: vec![
                            DataPoint::new("Running", 3.0),
                            DataPoint::new("Stopped", 1.0),
                            DataPoint::new("Idle", 2.0),
                        ],
                    },
                ),
                Widget::new(
                    "Total Containers",
                    now_ms,
                    WidgetKind::Stat {
                        value: 78.0,
                        description: "Total running containers in CWPP".to_string(),
                    },
                ),
            ],
        ),
        Category::with_widgets(
            "Risk Dashboard",
            vec![
                Widget::new(
                    "Risk Severity Overview",
                    now_ms,
                    WidgetKind::RiskBar {
                        data: vec![
                            DataPoint::new("Critical", 8.0),
                            DataPoint::new("High", 15.0),
                            DataPoint::new("Medium", 30.0),
                            DataPoint::new("Low", 50.0),
                        ],
                    },
                ),
                Widget::new(
                    "Risk Trends",
                    now_ms,
                    WidgetKind::Line {
                        data: vec![
                            DataPoint::new("Jan", 10.0),
                            DataPoint::new("Feb", 20.0),
                            DataPoint::new("Mar", 15.0),
                        ],
                    },
                ),
                Widget::new(
                    "Risk Count by Region",
                    now_ms,
                    WidgetKind::Bar {
                        data: vec![
                            DataPoint::new("US-East", 12.0),
                            DataPoint::new("EU-West", 9.0),
                            DataPoint::new("AP-South", 14.0),
                        ],
                    },
                ),
                Widget::new(
                    "Total Risks",
                    now_ms,
                    WidgetKind::Stat {
                        value: 102.0,
                        description: "Combined risk items".to_string(),
                    },
                ),
            ],
        ),
    ]
}

// ============================================================================
// Tests
// ============================================================================
