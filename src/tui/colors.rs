//! Color constants for the terminal user interface.

use ratatui::style::Color;

use crate::fields::Status;

/// Header, status bar and ideal row background.
pub const DARK_GREEN: Color = Color::Rgb(0, 80, 0);
/// Tasks in development
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Delete confirmation
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
/// Date picker popup
pub const DARK_PURPLE: Color = Color::Rgb(86, 60, 92);

/// Foreground color for a task row.
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Open => Color::White,
        Status::InDevelopment => GOLD,
        Status::Review => Color::Cyan,
        Status::Done => Color::DarkGray,
    }
}
