// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toast styling.
//!
//! These are the values a [`Style`](crate::toast::Style) falls back to when a
//! field is left unset. They are applied at presentation time and never
//! written back into the style.

use crate::toast::{Position, ToastFont};
use crate::ui::design_tokens::{motion, palette, radius, spacing, typography};
use iced::Color;
use std::time::Duration;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Default anchor: bottom edge, horizontally centered, 20px inset.
pub const DEFAULT_POSITION: Position = Position::Bottom(spacing::SCREEN_EDGE);

/// Default time the toast stays fully visible before fading out.
pub const DEFAULT_DURATION: Duration = motion::HOLD;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

pub const DEFAULT_BACKGROUND_COLOR: Color = palette::GRAY_500;

pub const DEFAULT_CORNER_RADIUS: f32 = radius::TOAST;

// ==========================================================================
// Text Defaults
// ==========================================================================

pub const DEFAULT_TEXT_COLOR: Color = palette::WHITE;

/// Platform headline font.
pub const DEFAULT_FONT: ToastFont = ToastFont::new(iced::Font::DEFAULT, typography::HEADLINE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_is_bottom_twenty() {
        assert_eq!(DEFAULT_POSITION, Position::Bottom(20.0));
    }

    #[test]
    fn default_duration_is_three_seconds() {
        assert_eq!(DEFAULT_DURATION, Duration::from_secs(3));
    }
}
