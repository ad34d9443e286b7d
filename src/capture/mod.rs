// SPDX-License-Identifier: MPL-2.0
//! Capture data source backing the gallery and the preview dialog.
//!
//! A capture is one image file inside the library directory. The gallery
//! browses the ordered list of [`CaptureId`]s; the preview asks the library for
//! the full [`CaptureData`] of one id at a time.
//!
//! - [`library`] - directory scanning and asynchronous capture lookup
//! - [`downloader`] - exporting a loaded capture to the user's download area

pub mod downloader;
pub mod library;

pub use downloader::CaptureDownloader;
pub use library::CaptureLibrary;

use iced::widget::image;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File extensions recognized as captures (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

/// Opaque identifier of a capture: its file name inside the library directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaptureId(Arc<str>);

impl CaptureId {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaptureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered ids browsed during one preview session.
pub type Collection = Arc<[CaptureId]>;

/// Record returned by a capture lookup.
#[derive(Debug, Clone)]
pub struct CaptureData {
    pub id: CaptureId,
    /// Path of the full-size image.
    pub active: PathBuf,
    /// Intrinsic width in pixels.
    pub active_width: u32,
    /// Intrinsic height in pixels.
    pub active_height: u32,
    /// Decoded pixels ready for rendering.
    pub handle: image::Handle,
}

impl CaptureData {
    /// Intrinsic size as floating point, the unit the fit algorithm works in.
    #[must_use]
    pub fn intrinsic_size(&self) -> iced::Size {
        iced::Size::new(self.active_width as f32, self.active_height as f32)
    }
}

/// Returns true when the path carries one of the [`SUPPORTED_EXTENSIONS`].
pub fn is_supported_capture(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
