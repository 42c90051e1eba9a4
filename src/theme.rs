//! Theme and styling constants for the lazydash TUI.
//!
//! Chart colors and consistent styling for borders, titles, and selections.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Chart Palette
// ============================================================================

/// Fixed 4-color chart palette; entries cycle by index modulo 4.
pub const CHART_PALETTE: [Color; 4] = [
    Color::Rgb(248, 113, 113), // red
    Color::Rgb(250, 204, 21),  // yellow
    Color::Rgb(96, 165, 250),  // blue
    Color::Rgb(74, 222, 128),  // green
];

/// Returns the palette color for a chart entry index.
#[must_use]
pub const fn palette_color(index: usize) -> Color {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles_modulo_four() {
        assert_eq!(palette_color(0), CHART_PALETTE[0]);
        assert_eq!(palette_color(3), CHART_PALETTE[3]);
        assert_eq!(palette_color(4), CHART_PALETTE[0]);
        assert_eq!(palette_color(7), CHART_PALETTE[3]);
    }
}
