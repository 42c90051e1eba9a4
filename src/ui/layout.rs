//! Layout calculations for the lazydash TUI.
//!
//! This module provides layout constants and helper functions for
//! calculating UI element positions and sizes.

use ratatui::layout::Rect;

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area (title, search bar, time filter).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the category tab bar.
pub const TABS_HEIGHT: u16 = 1;

/// Height of the footer area in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of one widget card in the dashboard grid.
pub const CARD_HEIGHT: u16 = 10;

/// Number of widget cards per grid row.
pub const CARDS_PER_ROW: u16 = 2;

// ============================================================================
// Layout Helpers
// ============================================================================

/// Calculate a centered popup area, clamped to the parent with a margin.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
