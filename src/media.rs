//! Intake of dropped or picked files.
//!
//! Files are read fully into memory and turned into self-contained data URLs;
//! nothing is uploaded anywhere. MIME detection goes by file extension, the
//! same way a browser labels a dropped file.

use crate::constants::FALLBACK_MIME;
use crate::error::{MediaError, MediaResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use std::path::Path;
use tracing::debug;

/// A file the visitor handed to a dropzone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaFile {
    /// File name without directories, used as gallery alt text
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a file from disk, labelling it by extension.
    pub fn from_path(path: &Path) -> MediaResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| MediaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());
        Ok(Self::new(name, mime_from_path(path), bytes))
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    pub fn is_video(&self) -> bool {
        self.mime.starts_with("video/")
    }

    /// Encode as `data:<mime>;base64,<payload>`.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// MIME type for a path, judged by extension only.
pub fn mime_from_path(path: &Path) -> String {
    if let Ok(format) = ImageFormat::from_path(path) {
        return format.to_mime_type().to_string();
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match ext.as_deref() {
        Some("svg") => "image/svg+xml",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        _ => FALLBACK_MIME,
    }
    .to_string()
}

/// Read every path; either all files come back or none do.
///
/// Unlike a fire-and-forget read, every failure is reported: the error is a
/// [`MediaError::Batch`] listing each path that could not be read.
pub fn read_batch<P: AsRef<Path>>(paths: &[P]) -> MediaResult<Vec<MediaFile>> {
    let mut files = Vec::with_capacity(paths.len());
    let mut failures = Vec::new();

    for path in paths {
        match MediaFile::from_path(path.as_ref()) {
            Ok(file) => files.push(file),
            Err(e) => failures.push(e),
        }
    }

    if !failures.is_empty() {
        return Err(MediaError::Batch {
            failures,
            total: paths.len(),
        });
    }

    debug!(count = files.len(), "Read dropped files");
    Ok(files)
}
