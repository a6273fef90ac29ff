// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast style file: loading and saving user
//! overrides to a `toast.toml` file, and turning them into a [`Style`].
//!
//! Every field is optional. Fields left out fall back to the values in
//! [`defaults`] when a toast is presented.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, ToastConfig};
//! use iced_toast::toast::Position;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.style.position = Some(Position::TopRight(40.0));
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! let style = config.style.to_style().expect("colors are valid");
//! assert_eq!(style.position, Some(Position::TopRight(40.0)));
//! ```
//!
//! A file looks like:
//!
//! ```toml
//! [style]
//! position = { anchor = "bottom_right", inset = 20.0 }
//! duration_secs = 4.5
//! background_color = "#202020E6"
//! text_color = "#FFFFFF"
//! corner_radius = 12.0
//! font_size = 32.0
//! ```

pub mod defaults;

use crate::error::{Error, Result};
use crate::toast::{Position, Style, ToastFont};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

const CONFIG_FILE: &str = "toast.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default)]
    pub style: StyleConfig,
}

/// Serializable mirror of [`Style`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl StyleConfig {
    /// Converts to a [`Style`], parsing colour strings.
    ///
    /// A duration that is negative, not finite or too large for a
    /// [`Duration`] is ignored.
    pub fn to_style(&self) -> Result<Style> {
        Ok(Style {
            position: self.position,
            duration: self
                .duration_secs
                .and_then(|secs| Duration::try_from_secs_f32(secs).ok()),
            background_color: self.background_color.as_deref().map(parse_color).transpose()?,
            corner_radius: self.corner_radius,
            font: self.font_size.map(ToastFont::sized),
            text_color: self.text_color.as_deref().map(parse_color).transpose()?,
        })
    }

    /// Builds the serializable form of `style`. The font face is not stored,
    /// only its size.
    #[must_use]
    pub fn from_style(style: &Style) -> Self {
        Self {
            position: style.position,
            duration_secs: style.duration.map(|duration| duration.as_secs_f32()),
            background_color: style.background_color.map(format_color),
            corner_radius: style.corner_radius,
            font_size: style.font.map(|font| font.size),
            text_color: style.text_color.map(format_color),
        }
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA`.
pub fn parse_color(value: &str) -> Result<Color> {
    let invalid = || Error::InvalidColor(value.to_string());
    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |index: usize| {
        u8::from_str_radix(&hex[index..index + 2], 16).map_err(|_| invalid())
    };
    let alpha = if hex.len() == 8 { channel(6)? } else { u8::MAX };

    Ok(Color::from_rgba8(
        channel(0)?,
        channel(2)?,
        channel(4)?,
        f32::from(alpha) / 255.0,
    ))
}

/// Formats a colour as `#RRGGBBAA`.
#[must_use]
pub fn format_color(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "invalid toast config, using defaults");
            Ok(ToastConfig::default())
        }
    }
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_style() {
        let config = ToastConfig {
            style: StyleConfig {
                position: Some(Position::TopLeft(32.0)),
                duration_secs: Some(4.5),
                background_color: Some("#202020E6".to_string()),
                corner_radius: Some(12.0),
                font_size: Some(30.0),
                text_color: None,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toast.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toast.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, ToastConfig::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn position_reads_tagged_table() {
        let config: ToastConfig = toml::from_str(
            r#"
            [style]
            position = { anchor = "bottom_right", inset = 20.0 }
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.style.position, Some(Position::BottomRight(20.0)));
    }

    #[test]
    fn empty_file_gives_empty_style() {
        let config: ToastConfig = toml::from_str("").expect("valid toml");
        let style = config.style.to_style().expect("no colors to parse");
        assert_eq!(style, Style::default());
    }

    #[test]
    fn to_style_converts_every_field() {
        let style = StyleConfig {
            position: Some(Position::Top(5.0)),
            duration_secs: Some(1.5),
            background_color: Some("#000000".to_string()),
            corner_radius: Some(2.0),
            font_size: Some(25.0),
            text_color: Some("#FF000080".to_string()),
        }
        .to_style()
        .expect("valid colors");

        assert_eq!(style.position, Some(Position::Top(5.0)));
        assert_eq!(style.duration, Some(Duration::from_millis(1500)));
        assert_eq!(style.background_color, Some(Color::from_rgb8(0, 0, 0)));
        assert_eq!(style.corner_radius, Some(2.0));
        assert_eq!(style.font, Some(ToastFont::sized(25.0)));
        let text = style.text_color.expect("text color set");
        assert_eq!(text.r, 1.0);
        assert_abs_diff_eq!(text.a, 128.0 / 255.0, epsilon = f32::EPSILON);
    }

    #[test]
    fn negative_duration_is_ignored() {
        let style = StyleConfig {
            duration_secs: Some(-1.0),
            ..StyleConfig::default()
        }
        .to_style()
        .expect("no colors");
        assert!(style.duration.is_none());
    }

    #[test]
    fn out_of_range_duration_is_ignored() {
        let config: ToastConfig =
            toml::from_str("[style]\nduration_secs = 1e30\n").expect("valid toml");
        let style = config.style.to_style().expect("no colors");
        assert!(style.duration.is_none());

        let style = StyleConfig {
            duration_secs: Some(f32::INFINITY),
            ..StyleConfig::default()
        }
        .to_style()
        .expect("no colors");
        assert!(style.duration.is_none());
    }

    #[test]
    fn parse_color_rejects_malformed_input() {
        for bad in ["", "FFFFFF", "#FFF", "#GGGGGG", "#FFFFFFF", "#ÀÀÀÀÀÀ"] {
            assert!(
                matches!(parse_color(bad), Err(Error::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn format_color_is_uppercase_hex_with_alpha() {
        assert_eq!(format_color(Color::WHITE), "#FFFFFFFF");
        assert_eq!(format_color(Color::from_rgb8(0x12, 0xAB, 0x00)), "#12AB00FF");
    }

    #[test]
    fn from_style_keeps_font_size_only() {
        let style = Style::new()
            .with_font(ToastFont::sized(44.0))
            .with_background_color(Color::BLACK);
        let config = StyleConfig::from_style(&style);

        assert_eq!(config.font_size, Some(44.0));
        assert_eq!(config.background_color.as_deref(), Some("#000000FF"));
        assert!(config.position.is_none());
    }
}
