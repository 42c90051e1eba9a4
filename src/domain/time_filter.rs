//! Time filter for restricting visible widgets to a trailing window.

// ============================================================================
// Time Filter
// ============================================================================

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Predicate restricting visible widgets to a trailing window ending at the
/// current instant.
///
/// The window is evaluated against wall-clock "now" at filter time, so the
/// windowed filters are intentionally not stable across repeated calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    /// No time restriction.
    #[default]
    All,
    /// Widgets created within the last 24 hours.
    Last24Hours,
    /// Widgets created within the last 7 days.
    Last7Days,
    /// Widgets created within the last 30 days.
    Last30Days,
}

impl TimeFilter {
    /// Returns the window length in milliseconds, or `None` for [`Self::All`].
    #[must_use]
    pub const fn window_ms(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Last24Hours => Some(24 * HOUR_MS),
            Self::Last7Days => Some(7 * DAY_MS),
            Self::Last30Days => Some(30 * DAY_MS),
        }
    }

    /// Returns the display string for this filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "All Time",
            Self::Last24Hours => "Last 24 Hours",
            Self::Last7Days => "Last 7 Days",
            Self::Last30Days => "Last 30 Days",
        }
    }

    /// Cycles to the next filter value.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Last24Hours,
            Self::Last24Hours => Self::Last7Days,
            Self::Last7Days => Self::Last30Days,
            Self::Last30Days => Self::All,
        }
    }

    /// Whether a widget created at `timestamp_ms` falls inside the window
    /// ending at `now_ms`.
    #[must_use]
    pub fn matches(self, timestamp_ms: i64, now_ms: i64) -> bool {
        match self.window_ms() {
            None => true,
            Some(window) => now_ms - timestamp_ms <= window,
        }
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
    fn test_cycle_covers_all_values() {
        let mut current = TimeFilter::default();
        assert_eq!(current, TimeFilter::All);

        let expected = [
            TimeFilter::Last24Hours,
            TimeFilter::Last7Days,
            TimeFilter::Last30Days,
            TimeFilter::All,
        ];
        for want in expected {
            current = current.next();
            assert_eq!(current, want);
        }
    }

    #[rstest]
    #[case::all(TimeFilter::All, None)]
    #[case::day(TimeFilter::Last24Hours, Some(86_400_000))]
    #[case::week(TimeFilter::Last7Days, Some(604_800_000))]
    #[case::month(TimeFilter::Last30Days, Some(2_592_000_000))]
    fn test_window_lengths(#[case] filter: TimeFilter, #[case] window: Option<i64>) {
        assert_eq!(filter.window_ms(), window);
    }

    #[test]
    fn test_last_24_hours_boundary() {
        let now = 1_700_000_000_000;

        // Two days old: excluded. One hour old: included.
        assert!(!TimeFilter::Last24Hours.matches(now - 2 * DAY_MS, now));
        assert!(TimeFilter::Last24Hours.matches(now - HOUR_MS, now));

        // Exactly at the window edge is still included.
        assert!(TimeFilter::Last24Hours.matches(now - 24 * HOUR_MS, now));
        assert!(!TimeFilter::Last24Hours.matches(now - 24 * HOUR_MS - 1, now));
    }

    #[test]
    fn test_all_matches_everything() {
        let now = 1_700_000_000_000;
        assert!(TimeFilter::All.matches(0, now));
        assert!(TimeFilter::All.matches(now - 365 * DAY_MS, now));
        // Future timestamps also pass; only windowed filters compare.
        assert!(TimeFilter::All.matches(now + DAY_MS, now));
    }
}
