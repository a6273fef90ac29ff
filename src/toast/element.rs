// SPDX-License-Identifier: MPL-2.0
//! Hint text: plain strings interleaved with inline button glyphs.
//!
//! ```
//! use iced_toast::toast::{GlyphId, HintText};
//!
//! let hint = HintText::new()
//!     .text("Press the ")
//!     .glyph(GlyphId::MenuWhite)
//!     .text(" button to exit app");
//! assert_eq!(hint.len(), 3);
//! ```

use super::glyph::GlyphId;
use super::text::StyledText;
use super::ToastFont;
use iced::Color;

/// One piece of a [`HintText`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToastElement {
    Text(String),
    Glyph(GlyphId),
}

impl From<&str> for ToastElement {
    fn from(text: &str) -> Self {
        ToastElement::Text(text.to_string())
    }
}

impl From<String> for ToastElement {
    fn from(text: String) -> Self {
        ToastElement::Text(text)
    }
}

impl From<GlyphId> for ToastElement {
    fn from(glyph: GlyphId) -> Self {
        ToastElement::Glyph(glyph)
    }
}

/// An ordered sequence of [`ToastElement`]s, rendered left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HintText {
    elements: Vec<ToastElement>,
}

impl HintText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text element.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.elements.push(ToastElement::Text(text.into()));
        self
    }

    /// Appends a glyph element.
    #[must_use]
    pub fn glyph(mut self, glyph: GlyphId) -> Self {
        self.elements.push(ToastElement::Glyph(glyph));
        self
    }

    /// Appends any element in place.
    pub fn push(&mut self, element: impl Into<ToastElement>) {
        self.elements.push(element.into());
    }

    #[must_use]
    pub fn elements(&self) -> &[ToastElement] {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Builds the styled text for this hint. See [`StyledText::compose`].
    #[must_use]
    pub fn build(&self, font: ToastFont, color: Color) -> StyledText {
        StyledText::compose(&self.elements, font, color)
    }
}

impl From<Vec<ToastElement>> for HintText {
    fn from(elements: Vec<ToastElement>) -> Self {
        Self { elements }
    }
}

impl FromIterator<ToastElement> for HintText {
    fn from_iter<I: IntoIterator<Item = ToastElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let hint = HintText::new()
            .glyph(GlyphId::SiriWhite)
            .text("to search");

        assert_eq!(
            hint.elements(),
            &[
                ToastElement::Glyph(GlyphId::SiriWhite),
                ToastElement::Text("to search".to_string()),
            ]
        );
    }

    #[test]
    fn push_accepts_strings_and_glyphs() {
        let mut hint = HintText::new();
        hint.push("Hold ");
        hint.push(GlyphId::PlayPauseWhite);
        assert_eq!(hint.len(), 2);
        assert!(matches!(hint.elements()[1], ToastElement::Glyph(_)));
    }

    #[test]
    fn collects_from_iterator() {
        let hint: HintText = ["a", "b"].into_iter().map(ToastElement::from).collect();
        assert_eq!(hint.len(), 2);
        assert!(!hint.is_empty());
    }
}
