// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::capture::{CaptureData, CaptureLibrary};
use crate::error::Error;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::preview::{self, RequestTag};
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Preview(preview::Message),
    /// Result of a capture lookup issued by the preview.
    CaptureFound {
        tag: RequestTag,
        result: Result<CaptureData, Error>,
    },
    /// Result of an export; `None` when the save dialog was cancelled.
    DownloadFinished(Result<Option<PathBuf>, Error>),
    Notification(notifications::Message),
    Tick(Instant),
    WindowResized(Size),
    LibraryLoaded(Result<CaptureLibrary, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Capture directory to browse instead of the configured one.
    pub directory: Option<PathBuf>,
    /// Optional data directory override.
    /// Takes precedence over `CAPTURE_VIEWER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CAPTURE_VIEWER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
