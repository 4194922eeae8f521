//! Local profile image read from disk.
//!
//! Stands in for the browser's `accept="image/*"` picker: only files with a
//! known image extension are accepted, and the bytes are not inspected.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("failed to read profile image {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not an image (expected png, jpg, jpeg, gif, webp, bmp, svg or avif)", .0.display())]
    NotAnImage(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalImage {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl LocalImage {
    /// Read an image file for upload.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::NotAnImage`] for non-image extensions and
    /// [`ImageError::Read`] when the file cannot be read.
    pub async fn open(path: &Path) -> Result<Self, ImageError> {
        let mime_type = image_mime_type(path).ok_or_else(|| ImageError::NotAnImage(path.to_path_buf()))?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ImageError::Read { path: path.to_path_buf(), source })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "profile".to_owned(), |n| n.to_string_lossy().into_owned());
        Ok(Self { file_name, mime_type, bytes })
    }
}

fn image_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => return None,
    };
    Some(mime)
}
