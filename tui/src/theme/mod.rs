//! Theme and Colors
//!
//! The small palette the chat surface draws with.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Speaker Colors
// ============================================================================

/// User lines and the input prompt
pub const USER_GREEN: Color = Color::Green;

/// Beru's signature magenta (assistant lines)
pub const BERU_MAGENTA: Color = Color::Magenta;

// ============================================================================
// UI Colors
// ============================================================================

/// Borders, separators, status bar
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Lines fading out at the edge of a scrolled view
pub const FADE_GRAY: Color = Color::Rgb(120, 120, 120);

/// Scroll indicator
pub const SCROLL_YELLOW: Color = Color::Yellow;

/// Requests in flight
pub const BUSY_CYAN: Color = Color::Cyan;

/// Prefix shown before user lines
pub const USER_PREFIX: &str = "You: ";

/// Prefix shown before assistant lines
pub const BERU_PREFIX: &str = "Beru: ";

/// Style for the send button label
pub fn send_button_style() -> Style {
    Style::default()
        .fg(BERU_MAGENTA)
        .add_modifier(Modifier::BOLD)
}
