// SPDX-License-Identifier: MPL-2.0
//! Toast placement and appearance.

use super::text::ToastFont;
use crate::config::defaults;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where a toast is anchored. Each variant carries the inset, in pixels,
/// kept from the edges it touches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "anchor", content = "inset", rename_all = "snake_case")]
pub enum Position {
    Top(f32),
    TopLeft(f32),
    TopRight(f32),
    Bottom(f32),
    BottomLeft(f32),
    BottomRight(f32),
}

impl Position {
    #[must_use]
    pub fn inset(self) -> f32 {
        match self {
            Position::Top(inset)
            | Position::TopLeft(inset)
            | Position::TopRight(inset)
            | Position::Bottom(inset)
            | Position::BottomLeft(inset)
            | Position::BottomRight(inset) => inset,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        defaults::DEFAULT_POSITION
    }
}

/// Optional styling. Unset fields fall back to the defaults in
/// [`config::defaults`](crate::config::defaults) when the toast is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    // presentation
    pub position: Option<Position>,
    pub duration: Option<Duration>,
    // appearance
    pub background_color: Option<Color>,
    pub corner_radius: Option<f32>,
    // text
    pub font: Option<ToastFont>,
    pub text_color: Option<Color>,
}

impl Style {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: ToastFont) -> Self {
        self.font = Some(font);
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Fills every unset field with its default. `self` is left untouched.
    #[must_use]
    pub fn resolve(&self) -> ResolvedStyle {
        ResolvedStyle {
            position: self.position.unwrap_or(defaults::DEFAULT_POSITION),
            duration: self.duration.unwrap_or(defaults::DEFAULT_DURATION),
            background_color: self
                .background_color
                .unwrap_or(defaults::DEFAULT_BACKGROUND_COLOR),
            corner_radius: self.corner_radius.unwrap_or(defaults::DEFAULT_CORNER_RADIUS),
            font: self.font.unwrap_or(defaults::DEFAULT_FONT),
            text_color: self.text_color.unwrap_or(defaults::DEFAULT_TEXT_COLOR),
        }
    }
}

/// A [`Style`] with every field decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub position: Position,
    pub duration: Duration,
    pub background_color: Color,
    pub corner_radius: f32,
    pub font: ToastFont,
    pub text_color: Color,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Style::default().resolve()
    }
}
