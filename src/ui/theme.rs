//! Theme system for the drawer shell
//! Supports both dark and light modes with a shared accent palette

use iced::color;
use iced::widget::container;
use iced::{Background, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x1e1e1e);
    pub const BORDER: Color = color!(0x2c2c2c);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfafafa);
    pub const SURFACE: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

// ============================================================================
// Accents and drawer palette (theme-independent, drawn over the gradient)
// ============================================================================

/// Primary accent (drawer labels, avatar ring, follow pill)
pub const ACCENT: Color = color!(0x6750a4);

/// Status-bar green, also the inner color of the drawer gradient
pub const ACCENT_GREEN: Color = color!(0x2e9e5b);

pub const LIGHT: Color = color!(0xffffff);

/// Inactive drawer label color over the gradient backdrop
pub const DRAWER_TEXT: Color = color!(0x3a3a3a);

/// Medium font weight for emphasized labels
pub const MEDIUM_WEIGHT: iced::font::Weight = iced::font::Weight::Medium;

/// Scale a color's alpha, used to fade whole widget subtrees
pub fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

// ============================================================================
// Container styles
// ============================================================================

/// Main content area style
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

/// Top bar style (status-bar green, like the shell's header)
pub fn top_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACCENT_GREEN)),
        ..Default::default()
    }
}

/// Card style for page content blocks
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: iced::Border {
            color: border_color(theme),
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}
