//! Shared test utilities and Mother pattern factories.
//!
//! This module provides reusable test fixtures following the Mother
//! pattern. Use these helpers to avoid copy-pasting setup code across
//! tests.
#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend};
use rstest::*;

use crate::domain::{Category, DataPoint, Widget, WidgetKind};
use crate::state::App;
use crate::store::Storage;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct WidgetMother;

impl WidgetMother {
    #[must_use]
    pub fn stat(name: &str, timestamp: i64) -> Widget {
        Widget::new(
            name,
            timestamp,
            WidgetKind::Stat {
                value: 42.0,
                description: "A number".to_string(),
            },
        )
    }

    #[must_use]
    pub fn stat_at(name: &str, timestamp: i64) -> Widget {
        Self::stat(name, timestamp)
    }

    #[must_use]
    pub fn pie(name: &str, timestamp: i64) -> Widget {
        Widget::new(
            name,
            timestamp,
            WidgetKind::Pie {
                data: vec![
                    DataPoint::new("Connected", 2.0),
                    DataPoint::new("Not Connected", 2.0),
                ],
            },
        )
    }

    #[must_use]
    pub fn riskbar(name: &str, timestamp: i64, data: Vec<DataPoint>) -> Widget {
        Widget::new(name, timestamp, WidgetKind::RiskBar { data })
    }

    #[must_use]
    pub fn empty(name: &str, timestamp: i64) -> Widget {
        Widget::new(
            name,
            timestamp,
            WidgetKind::Empty {
                message: "No data available.".to_string(),
            },
        )
    }
}

pub struct CategoryMother;

impl CategoryMother {
    #[must_use]
    pub fn empty(name: &str) -> Category {
        Category::new(name)
    }

    #[must_use]
    pub fn with_widgets(name: &str, widgets: Vec<Widget>) -> Category {
        Category::with_widgets(name, widgets)
    }
}

// ============================================================================
// App Fixture
// ============================================================================

/// Builds an app over the seed dashboard with storage pointing at a
/// unique throwaway file.
#[must_use]
pub fn test_app() -> App {
    let path = std::env::temp_dir().join(format!("lazydash-test-{}.json", uuid::Uuid::new_v4()));
    App::new(Storage::new(path))
}

// ============================================================================
// Terminal Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap()
}

#[fixture]
pub fn test_terminal_100x40() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).unwrap()
}

/// Flattens a test terminal's buffer into a single string for content
/// assertions.
#[must_use]
pub fn buffer_string(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}
