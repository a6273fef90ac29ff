// SPDX-License-Identifier: MPL-2.0
//! Remote-control button glyphs that can be embedded inline in toast text.
//!
//! The images ship inside the binary via `rust-embed`. Each variant maps to a
//! fixed file name, `toast<Variant>.png`, under `assets/glyphs/`. A glyph whose
//! image is missing from the bundle is a packaging error and panics on first use.

use iced::widget::image::Handle;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/glyphs/"]
struct GlyphAssets;

/// A remote-control button glyph.
///
/// `White` variants are meant for dark backgrounds, `Black` for light ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphId {
    MenuBlack,
    MenuWhite,
    ScreenBlack,
    ScreenWhite,
    PlayPauseBlack,
    PlayPauseWhite,
    SiriBlack,
    SiriWhite,
    VolumeBlack,
    VolumeWhite,
}

impl GlyphId {
    /// Every glyph, in declaration order.
    pub const ALL: [GlyphId; 10] = [
        GlyphId::MenuBlack,
        GlyphId::MenuWhite,
        GlyphId::ScreenBlack,
        GlyphId::ScreenWhite,
        GlyphId::PlayPauseBlack,
        GlyphId::PlayPauseWhite,
        GlyphId::SiriBlack,
        GlyphId::SiriWhite,
        GlyphId::VolumeBlack,
        GlyphId::VolumeWhite,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GlyphId::MenuBlack => "MenuBlack",
            GlyphId::MenuWhite => "MenuWhite",
            GlyphId::ScreenBlack => "ScreenBlack",
            GlyphId::ScreenWhite => "ScreenWhite",
            GlyphId::PlayPauseBlack => "PlayPauseBlack",
            GlyphId::PlayPauseWhite => "PlayPauseWhite",
            GlyphId::SiriBlack => "SiriBlack",
            GlyphId::SiriWhite => "SiriWhite",
            GlyphId::VolumeBlack => "VolumeBlack",
            GlyphId::VolumeWhite => "VolumeWhite",
        }
    }

    /// Name of the backing image inside the asset bundle.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("toast{}.png", self.name())
    }

    /// Returns `true` for the white variants.
    #[must_use]
    pub fn is_light(self) -> bool {
        matches!(
            self,
            GlyphId::MenuWhite
                | GlyphId::ScreenWhite
                | GlyphId::PlayPauseWhite
                | GlyphId::SiriWhite
                | GlyphId::VolumeWhite
        )
    }

    /// Raw PNG bytes of this glyph.
    ///
    /// # Panics
    ///
    /// Panics if the image is not in the embedded bundle.
    #[must_use]
    pub fn bytes(self) -> Cow<'static, [u8]> {
        let file_name = self.file_name();
        match GlyphAssets::get(&file_name) {
            Some(file) => file.data,
            None => panic!("glyph asset `{file_name}` is missing from the bundle"),
        }
    }

    /// Cached image handle for rendering.
    ///
    /// # Panics
    ///
    /// Panics if the image is not in the embedded bundle.
    #[must_use]
    pub fn handle(self) -> Handle {
        static HANDLES: [OnceLock<Handle>; 10] = [const { OnceLock::new() }; 10];
        HANDLES[self as usize]
            .get_or_init(|| Handle::from_bytes(self.bytes().into_owned()))
            .clone()
    }

    /// Loads the image into the handle cache, so a missing asset fails when
    /// text is composed rather than on the first frame that draws it.
    ///
    /// # Panics
    ///
    /// Panics if the image is not in the embedded bundle.
    pub fn resolve(self) {
        let _ = self.handle();
    }
}
