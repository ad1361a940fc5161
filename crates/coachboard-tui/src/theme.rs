//! Color language for the coachboard TUI
//!
//! One semantic palette across all screens:
//! - Green: active, submitted, approved, success
//! - Red: overdue, rejected, errors
//! - Yellow: pending, paused, attention
//! - Gray: neutral, disabled
//! - Cyan: selected, focus, interactive

use coachboard_core::catalog::Tone;
use coachboard_core::ColorScheme;
use ratatui::style::Color;

/// Map a semantic tone to a terminal color for the active scheme.
pub fn tone_color(tone: Tone, scheme: ColorScheme) -> Color {
    match scheme {
        ColorScheme::Dark => match tone {
            Tone::Neutral => Color::Gray,
            Tone::Info => Color::Cyan,
            Tone::Success => Color::Green,
            Tone::Warning => Color::Yellow,
            Tone::Danger => Color::Red,
        },
        ColorScheme::Light => match tone {
            Tone::Neutral => Color::DarkGray,
            Tone::Info => Color::Rgb(0, 128, 128),
            Tone::Success => Color::Rgb(0, 128, 0),
            Tone::Warning => Color::Rgb(180, 120, 0),
            Tone::Danger => Color::Rgb(200, 0, 0),
        },
    }
}

/// Tone for a categorical status string, shared by tables and badges.
pub fn status_tone(status: &str) -> Tone {
    match status {
        "active" | "submitted" | "approved" | "completed" | "converted" | "success"
        | "Active" | "Submitted" | "Approved" | "Completed" | "Converted" => Tone::Success,
        "pending" | "paused" | "contacted" | "scheduled" | "sent" | "warning"
        | "Pending" | "Paused" | "Contacted" | "Scheduled" | "Sent" => Tone::Warning,
        "overdue" | "rejected" | "lost" | "cancelled" | "no-show" | "expired" | "error"
        | "Overdue" | "Rejected" | "Lost" | "Cancelled" | "No-show" | "Expired" => Tone::Danger,
        "new" | "qualified" | "info" | "New" | "Qualified" => Tone::Info,
        _ => Tone::Neutral,
    }
}

/// Base colors for backgrounds and text.
pub struct BaseColors;

impl BaseColors {
    pub fn bg(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::Black,
            ColorScheme::Light => Color::White,
        }
    }

    pub fn fg(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::White,
            ColorScheme::Light => Color::Black,
        }
    }

    pub fn muted(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::DarkGray,
            ColorScheme::Light => Color::Gray,
        }
    }
}

/// Focus state colors.
pub struct FocusStyle;

impl FocusStyle {
    pub fn focused_border(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::Cyan,
            ColorScheme::Light => Color::Rgb(0, 128, 128),
        }
    }

    pub fn unfocused_border(scheme: ColorScheme) -> Color {
        BaseColors::muted(scheme)
    }

    pub fn focused_bg(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::DarkGray,
            ColorScheme::Light => Color::Rgb(220, 220, 220),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tones() {
        assert_eq!(status_tone("submitted"), Tone::Success);
        assert_eq!(status_tone("overdue"), Tone::Danger);
        assert_eq!(status_tone("pending"), Tone::Warning);
        assert_eq!(status_tone("Weight Loss"), Tone::Neutral);
    }

    #[test]
    fn test_dark_scheme_colors() {
        assert_eq!(tone_color(Tone::Success, ColorScheme::Dark), Color::Green);
        assert_eq!(BaseColors::bg(ColorScheme::Dark), Color::Black);
    }
}
