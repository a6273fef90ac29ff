// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Present the four example toasts.
    ShowToasts,
    /// Animation frame for the toast overlay.
    Tick(Instant),
    WindowResized(Size),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Style file to use instead of the one in the user config directory.
    pub config_path: Option<PathBuf>,
    /// Write the loaded style to the user config directory at startup.
    pub save_config: bool,
}
