// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for television-style interfaces.
//!
//! A toast appears over existing content, shows a label for a while, fades out
//! and removes itself. This module is toolkit-agnostic: it drives any
//! [`Surface`], and the iced host lives in [`crate::ui::overlay`].
//!
//! # Components
//!
//! - [`element`] - `ToastElement` and the `HintText` builder
//! - [`glyph`] - Remote-control button glyphs and their embedded images
//! - [`text`] - `StyledText` runs and hint composition
//! - [`style`] - `Position`, `Style` and default resolution
//! - [`layout`] - Placement against a parent or a host window
//! - [`surface`] - The capabilities a host toolkit provides
//! - [`presenter`] - `Toast` and its fade sequence
//!
//! # Usage
//!
//! ```
//! use iced_toast::test_utils::RecordingSurface;
//! use iced_toast::toast::{GlyphId, HintText, Position, Style, Toast};
//! use iced::Size;
//!
//! let mut screen = RecordingSurface::new(Size::new(1920.0, 1080.0));
//!
//! let toast: Toast = Toast::sized(800.0, 140.0)
//!     .with_style(Style::new().with_position(Position::Bottom(20.0)))
//!     .with_hint_text(
//!         HintText::new()
//!             .text("Press the ")
//!             .glyph(GlyphId::MenuWhite)
//!             .text(" button to exit app"),
//!     );
//! toast.present(&mut screen);
//!
//! screen.finish_all();
//! assert_eq!(screen.attached_count(), 0);
//! ```

pub mod element;
pub mod glyph;
pub mod layout;
pub mod presenter;
pub mod style;
pub mod surface;
pub mod text;

pub use element::{HintText, ToastElement};
pub use glyph::GlyphId;
pub use presenter::{Callback, Toast};
pub use style::{Position, ResolvedStyle, Style};
pub use surface::{ChildView, Completion, Fade, Label, Layer, Phase, Region, Surface, ToastId};
pub use text::{Segment, StyledText, ToastFont};
