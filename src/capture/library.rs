// SPDX-License-Identifier: MPL-2.0
//! Capture library: the directory of captures shown in the gallery.
//!
//! Scanning is synchronous and happens once at startup. Lookups decode the
//! full image on tokio's blocking pool so the UI thread never waits on disk.

use super::{is_supported_capture, CaptureData, CaptureId, Collection};
use crate::app::config::SortOrder;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Directory-backed capture source.
#[derive(Debug, Clone)]
pub struct CaptureLibrary {
    root: PathBuf,
    captures: Collection,
}

impl CaptureLibrary {
    /// Library with no directory and no captures.
    pub fn empty() -> Self {
        Self {
            root: PathBuf::new(),
            captures: Arc::from(Vec::new()),
        }
    }

    /// Scans `root` (non-recursively) for supported captures, sorted by `sort_order`.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn open(root: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(root)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_capture(&path) {
                files.push(path);
            }
        }

        sort_captures(&mut files, sort_order);

        let captures: Vec<CaptureId> = files
            .iter()
            .filter_map(|path| capture_id(path))
            .collect();

        tracing::info!(
            directory = %root.display(),
            count = captures.len(),
            "capture library scanned"
        );

        Ok(Self {
            root: root.to_path_buf(),
            captures: Arc::from(captures),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ordered ids of every capture in the library.
    pub fn collection(&self) -> Collection {
        Arc::clone(&self.captures)
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    pub fn contains(&self, id: &CaptureId) -> bool {
        self.captures.contains(id)
    }

    pub fn path_of(&self, id: &CaptureId) -> PathBuf {
        self.root.join(id.as_str())
    }

    /// Path-backed handle; iced decodes it lazily when the thumbnail is drawn.
    pub fn thumbnail(&self, id: &CaptureId) -> image::Handle {
        image::Handle::from_path(self.path_of(id))
    }

    /// Looks up a capture and decodes its full-size image.
    ///
    /// The returned future owns everything it needs so it can be handed to
    /// `Task::perform`. It resolves exactly once.
    pub fn find_capture(
        &self,
        id: CaptureId,
    ) -> impl Future<Output = Result<CaptureData>> + Send + 'static {
        let known = self.contains(&id);
        let path = self.path_of(&id);

        async move {
            if !known {
                return Err(Error::CaptureNotFound(id));
            }

            tokio::task::spawn_blocking(move || load_capture(id, path))
                .await
                .map_err(|e| Error::Io(format!("capture lookup task failed: {e}")))?
        }
    }
}

impl Default for CaptureLibrary {
    fn default() -> Self {
        Self::empty()
    }
}

/// Reads and decodes one capture from disk.
/// Ids are file names; a name that is not valid UTF-8 could never be joined
/// back onto the root, so the file is left out of the library.
fn capture_id(path: &Path) -> Option<CaptureId> {
    let name = path.file_name()?;
    match name.to_str() {
        Some(name) => Some(CaptureId::new(name)),
        None => {
            tracing::warn!(path = %path.display(), "skipping capture with a non UTF-8 file name");
            None
        }
    }
}

fn load_capture(id: CaptureId, path: PathBuf) -> Result<CaptureData> {
    if !path.is_file() {
        return Err(Error::CaptureNotFound(id));
    }

    let bytes = std::fs::read(&path)?;
    let img = image_rs::load_from_memory(&bytes)?;
    let (width, height) = img.dimensions();

    if width == 0 || height == 0 {
        return Err(Error::Decode(format!("{} has empty dimensions", id)));
    }

    let pixels = img.to_rgba8().into_vec();
    tracing::debug!(capture = %id, width, height, "capture decoded");

    Ok(CaptureData {
        id,
        active: path,
        active_width: width,
        active_height: height,
        handle: image::Handle::from_rgba(width, height, pixels),
    })
}

fn sort_captures(files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("failed to write test png");
        path
    }

    #[test]
    fn open_lists_supported_files_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_png(temp_dir.path(), "b.png", 2, 2);
        write_png(temp_dir.path(), "a.png", 2, 2);
        fs::write(temp_dir.path().join("readme.txt"), b"not a capture").expect("write");

        let library =
            CaptureLibrary::open(temp_dir.path(), SortOrder::Alphabetical).expect("scan");

        let collection = library.collection();
        let names: Vec<&str> = collection.iter().map(CaptureId::as_str).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
    }

    #[test]
    fn open_skips_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("mkdir");
        write_png(temp_dir.path(), "only.png", 1, 1);

        let library =
            CaptureLibrary::open(temp_dir.path(), SortOrder::Alphabetical).expect("scan");
        assert_eq!(library.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn open_skips_non_utf8_file_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().expect("temp dir");
        let valid = write_png(dir.path(), "valid.png", 4, 4);
        fs::copy(&valid, dir.path().join(OsStr::from_bytes(b"bad\xff.png"))).expect("copy");

        let library = CaptureLibrary::open(dir.path(), SortOrder::Alphabetical).expect("scan");

        let collection = library.collection();
        let names: Vec<&str> = collection.iter().map(CaptureId::as_str).collect();
        assert_eq!(names, vec!["valid.png"]);
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does-not-exist");

        let result = CaptureLibrary::open(&missing, SortOrder::Alphabetical);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn empty_library_has_no_captures() {
        let library = CaptureLibrary::empty();
        assert!(library.is_empty());
        assert_eq!(library.collection().len(), 0);
    }

    #[tokio::test]
    async fn find_capture_reports_intrinsic_size() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "wide.png", 8, 3);
        let library =
            CaptureLibrary::open(temp_dir.path(), SortOrder::Alphabetical).expect("scan");

        let data = library
            .find_capture(CaptureId::new("wide.png"))
            .await
            .expect("capture should load");

        assert_eq!(data.active, path);
        assert_eq!(data.active_width, 8);
        assert_eq!(data.active_height, 3);
    }

    #[tokio::test]
    async fn find_capture_rejects_unknown_ids() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let library =
            CaptureLibrary::open(temp_dir.path(), SortOrder::Alphabetical).expect("scan");

        let result = library.find_capture(CaptureId::new("ghost.png")).await;
        assert!(matches!(result, Err(Error::CaptureNotFound(id)) if id.as_str() == "ghost.png"));
    }

    #[tokio::test]
    async fn find_capture_reports_decode_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("broken.png"), b"definitely not a png").expect("write");
        let library =
            CaptureLibrary::open(temp_dir.path(), SortOrder::Alphabetical).expect("scan");

        let result = library.find_capture(CaptureId::new("broken.png")).await;
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn find_capture_reports_files_removed_after_scan() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "gone.png", 2, 2);
        let library =
            CaptureLibrary::open(temp_dir.path(), SortOrder::Alphabetical).expect("scan");
        fs::remove_file(path).expect("remove");

        let result = library.find_capture(CaptureId::new("gone.png")).await;
        assert!(matches!(result, Err(Error::CaptureNotFound(_))));
    }
}
