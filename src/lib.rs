// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows transient toast notifications over an iced interface.
//!
//! A toast appears over existing content, holds for a while, fades out and
//! removes itself. Text can mix plain strings with remote-control button
//! glyphs. Placement is declarative: one of six anchors, each with an inset,
//! against a parent surface or against any region of the host window.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod test_utils;
pub mod toast;
pub mod ui;

pub use error::{Error, Result};
pub use toast::{GlyphId, HintText, Position, Style, Toast};
