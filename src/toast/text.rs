// SPDX-License-Identifier: MPL-2.0
//! Styled text runs and inline glyph attachments.

use super::element::ToastElement;
use super::glyph::GlyphId;
use crate::ui::design_tokens::spacing;
use iced::{Color, Rectangle};

/// A font face together with its point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastFont {
    pub font: iced::Font,
    pub size: f32,
}

impl ToastFont {
    #[must_use]
    pub const fn new(font: iced::Font, size: f32) -> Self {
        Self { font, size }
    }

    /// The default face at `size`.
    #[must_use]
    pub const fn sized(size: f32) -> Self {
        Self::new(iced::Font::DEFAULT, size)
    }

    #[must_use]
    pub fn point_size(&self) -> f32 {
        self.size
    }
}

/// One run of a [`StyledText`].
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Run {
        text: String,
        font: ToastFont,
        color: Color,
    },
    /// An inline image. `bounds` positions it relative to the text baseline;
    /// `None` uses the image's natural size.
    Glyph {
        glyph: GlyphId,
        bounds: Option<Rectangle>,
    },
}

/// An ordered list of styled runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    segments: Vec<Segment>,
}

impl StyledText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A single run of `text`.
    #[must_use]
    pub fn run(text: impl Into<String>, font: ToastFont, color: Color) -> Self {
        Self {
            segments: vec![Segment::Run {
                text: text.into(),
                font,
                color,
            }],
        }
    }

    /// A single inline glyph.
    ///
    /// # Panics
    ///
    /// Panics if the glyph's image is not in the embedded bundle.
    #[must_use]
    pub fn glyph(glyph: GlyphId, bounds: Option<Rectangle>) -> Self {
        glyph.resolve();
        Self {
            segments: vec![Segment::Glyph { glyph, bounds }],
        }
    }

    /// Joins several fragments end to end.
    #[must_use]
    pub fn concat(parts: impl IntoIterator<Item = StyledText>) -> Self {
        parts.into_iter().fold(Self::new(), |mut acc, part| {
            acc.append(part);
            acc
        })
    }

    pub fn append(&mut self, other: StyledText) {
        self.segments.extend(other.segments);
    }

    /// Builds styled text from hint elements.
    ///
    /// Text elements become runs in `font` and `color`. Glyphs are sized to
    /// `font.size + 30` and lifted by a quarter of that size so they sit
    /// centered on the line.
    ///
    /// # Panics
    ///
    /// Panics if a glyph's image is not in the embedded bundle.
    #[must_use]
    pub fn compose(elements: &[ToastElement], font: ToastFont, color: Color) -> Self {
        let segments = elements
            .iter()
            .map(|element| match element {
                ToastElement::Text(text) => Segment::Run {
                    text: text.clone(),
                    font,
                    color,
                },
                ToastElement::Glyph(glyph) => {
                    glyph.resolve();
                    Segment::Glyph {
                        glyph: *glyph,
                        bounds: Some(glyph_bounds(font)),
                    }
                }
            })
            .collect();

        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Text content with glyphs left out.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Run { text, .. } => Some(text.as_str()),
                Segment::Glyph { .. } => None,
            })
            .collect()
    }
}

/// Inline glyph bounds for text set in `font`.
#[must_use]
pub fn glyph_bounds(font: ToastFont) -> Rectangle {
    let size = font.point_size() + spacing::GLYPH_PADDING;
    Rectangle {
        x: 0.0,
        y: -size / 4.0,
        width: size,
        height: size,
    }
}
