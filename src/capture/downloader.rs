// SPDX-License-Identifier: MPL-2.0
//! Exporting the capture currently shown in the preview.
//!
//! The source file is copied, not re-encoded, into the export directory under
//! a timestamped name so repeated exports never overwrite each other.

use super::CaptureData;
use crate::app::config::ExportConfig;
use crate::app::paths;
use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use std::future::Future;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Upper bound on `-N` suffixes tried before giving up on a free file name.
const MAX_NAME_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct CaptureDownloader {
    export_dir: Option<PathBuf>,
    ask_destination: bool,
}

impl CaptureDownloader {
    #[must_use]
    pub fn new(export_dir: Option<PathBuf>, ask_destination: bool) -> Self {
        Self {
            export_dir,
            ask_destination,
        }
    }

    /// Uses the configured directory, falling back to the platform download
    /// directory.
    #[must_use]
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(
            config.directory.clone().or_else(paths::default_export_dir),
            config.ask_destination,
        )
    }

    #[must_use]
    pub fn export_dir(&self) -> Option<&Path> {
        self.export_dir.as_deref()
    }

    /// Copies the capture's active file out of the library.
    ///
    /// Resolves to the written path, or `None` when the user cancelled the
    /// save dialog.
    pub fn prepare_download(
        &self,
        data: &CaptureData,
    ) -> impl Future<Output = Result<Option<PathBuf>>> + Send + 'static {
        let source = data.active.clone();
        let export_dir = self.export_dir.clone();
        let ask_destination = self.ask_destination;
        let file_name = export_file_name(&source, Local::now());

        async move {
            let destination = if ask_destination {
                let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&file_name);
                if let Some(dir) = export_dir.as_ref() {
                    dialog = dialog.set_directory(dir);
                }
                match dialog.save_file().await {
                    Some(handle) => handle.path().to_path_buf(),
                    None => {
                        tracing::debug!("export cancelled");
                        return Ok(None);
                    }
                }
            } else {
                let dir = export_dir
                    .ok_or_else(|| Error::Export("no export directory available".into()))?;
                unique_destination(&dir, &file_name)?
            };

            tokio::task::spawn_blocking(move || copy_capture(&source, &destination))
                .await
                .map_err(|e| Error::Export(format!("export task failed: {e}")))?
                .map(Some)
        }
    }
}

impl Default for CaptureDownloader {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

/// `<stem>-<YYYYmmdd-HHMMSS>.<ext>` for `source` exported at `at`.
#[must_use]
pub fn export_file_name(source: &Path, at: DateTime<Local>) -> String {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("capture");
    let stamp = at.format(TIMESTAMP_FORMAT);

    match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-{stamp}.{ext}"),
        None => format!("{stem}-{stamp}"),
    }
}

/// First path in `dir` named `file_name`, or `file_name` with `-N` before the
/// extension, that does not exist yet.
fn unique_destination(dir: &Path, file_name: &str) -> Result<PathBuf> {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let name = Path::new(file_name);
    let stem = name.file_stem().and_then(|s| s.to_str()).unwrap_or(file_name);
    let ext = name.extension().and_then(|e| e.to_str());

    for n in 1..=MAX_NAME_ATTEMPTS {
        let numbered = match ext {
            Some(ext) => format!("{stem}-{n}.{ext}"),
            None => format!("{stem}-{n}"),
        };
        let candidate = dir.join(numbered);
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(Error::Export(format!(
        "no free file name for {file_name} in {}",
        dir.display()
    )))
}

fn copy_capture(source: &Path, destination: &Path) -> Result<PathBuf> {
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::Export(format!("{}: {e}", parent.display())))?;
    }

    std::fs::copy(source, destination)
        .map_err(|e| Error::Export(format!("{}: {e}", source.display())))?;

    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        "capture exported"
    );
    Ok(destination.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureId;
    use chrono::TimeZone;
    use iced::widget::image;
    use tempfile::tempdir;

    fn capture_at(path: PathBuf) -> CaptureData {
        CaptureData {
            id: CaptureId::new("shot.png"),
            active: path,
            active_width: 1,
            active_height: 1,
            handle: image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
        }
    }

    #[test]
    fn file_name_carries_stem_timestamp_and_extension() {
        let at = Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .expect("valid local time");
        assert_eq!(
            export_file_name(Path::new("/tmp/shot.png"), at),
            "shot-20240309-140507.png"
        );
        assert_eq!(
            export_file_name(Path::new("/tmp/raw"), at),
            "raw-20240309-140507"
        );
    }

    #[test]
    fn colliding_names_get_numeric_suffix() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("a.png"), b"x").expect("write");
        std::fs::write(dir.path().join("a-1.png"), b"x").expect("write");

        let path = unique_destination(dir.path(), "a.png").expect("free name");
        assert_eq!(path, dir.path().join("a-2.png"));
    }

    #[tokio::test]
    async fn download_copies_source_into_export_dir() {
        let library = tempdir().expect("library dir");
        let exports = tempdir().expect("export dir");
        let source = library.path().join("shot.png");
        std::fs::write(&source, b"capture bytes").expect("write source");

        let downloader = CaptureDownloader::new(Some(exports.path().join("nested")), false);
        let written = downloader
            .prepare_download(&capture_at(source))
            .await
            .expect("export succeeds")
            .expect("no dialog involved");

        assert!(written.starts_with(exports.path().join("nested")));
        assert_eq!(std::fs::read(&written).expect("read copy"), b"capture bytes");
    }

    #[tokio::test]
    async fn missing_source_is_an_export_error() {
        let exports = tempdir().expect("export dir");
        let downloader = CaptureDownloader::new(Some(exports.path().to_path_buf()), false);

        let result = downloader
            .prepare_download(&capture_at(exports.path().join("gone.png")))
            .await;

        assert!(matches!(result, Err(Error::Export(_))));
    }

    #[tokio::test]
    async fn no_export_directory_is_an_error() {
        let downloader = CaptureDownloader::new(None, false);
        let result = downloader
            .prepare_download(&capture_at(PathBuf::from("shot.png")))
            .await;
        assert!(matches!(result, Err(Error::Export(_))));
    }
}
