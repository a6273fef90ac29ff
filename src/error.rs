// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Only configuration handling can fail at runtime. A missing glyph asset is a
//! packaging error and panics in [`crate::toast::GlyphId::bytes`]; a missing host
//! surface is a silent no-op in [`crate::toast::Toast::present_in_host`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A colour string that is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color `{0}`, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
