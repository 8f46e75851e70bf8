//! Filesystem scanning and manifest construction.
//!
//! Walks the image root recursively, keeps every regular file whose
//! extension is a recognized image format, and collects the root-relative
//! paths into a sorted [`Manifest`].
//!
//! ## Directory Structure
//!
//! Any layout under the root works; subdirectories are purely
//! organizational and survive into the manifest as path prefixes:
//!
//! ```text
//! img/
//! ├── cats/
//! │   ├── cat1.png
//! │   └── cat2.png
//! ├── dogs/
//! │   └── dog1.jpg
//! ├── sea.webp
//! └── notes.txt                    # not an image, ignored
//! ```
//!
//! ## Matching Rules
//!
//! - Extension comparison is case-insensitive (`b.JPG` matches `jpg`);
//!   filename casing is preserved in the manifest.
//! - Files without an extension are skipped. There is no hidden-file
//!   filter: `.cover.png` counts as an image.
//! - Symlinks are neither followed nor listed, so a link cycle under the
//!   root cannot recurse.
//!
//! ## Output
//!
//! Paths are relative to the root, joined with `/` on every platform, and
//! sorted ascending by byte order. [`Manifest`] serializes as a plain JSON
//! array:
//!
//! ```text
//! [
//!   "cats/cat1.png",
//!   "cats/cat2.png",
//!   "dogs/dog1.jpg",
//!   "sea.webp"
//! ]
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Directory tree scanned for images, relative to the working directory.
pub const IMAGE_ROOT: &str = "img";

/// Manifest filename, written inside [`IMAGE_ROOT`].
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Recognized image extensions, lowercase. Matching is case-insensitive.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Manifest output from the scan: image paths relative to the root,
/// sorted ascending. Serializes as a plain JSON array of strings.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    pub images: Vec<String>,
}

/// Path of the manifest file for a given root.
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILENAME)
}

/// Scan `root` recursively and build the manifest.
///
/// Discovery order is filesystem-dependent and discarded: the result is
/// fully sorted, so an unchanged tree always produces the same manifest.
/// Traversal errors (unreadable directory, permission denied) are fatal.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() && is_image(entry.path()) {
            images.push(relative_slash_path(entry.path(), root));
        }
    }

    images.sort();

    Ok(Manifest { images })
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Root-relative path with components joined by `/`, regardless of the
/// host separator.
fn relative_slash_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap();
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
