// SPDX-License-Identifier: MPL-2.0
//! iced integration for toasts.
//!
//! - [`design_tokens`] - Design system constants (colors, sizes, motion)
//! - [`overlay`] - A toast host surface rendered as an iced layer

pub mod design_tokens;
pub mod overlay;

pub use overlay::{CustomView, Overlay};
