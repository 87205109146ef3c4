use std::path::{Path, PathBuf};

use super::error::UploadError;

/// MIME type the picker filters on.
pub const PDF_MIME: &str = "application/pdf";

/// Content type sent for anything that is not a PDF.
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// A file chosen for upload.
///
/// Holds only the handle; the bytes are read when the request is built.
/// A new selection replaces the old value wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    file_name: String,
    content_type: &'static str,
}

impl SelectedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.pdf".to_string());
        let content_type = content_type_for(&path);
        Self {
            path,
            file_name,
            content_type,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Read the whole file.
    pub async fn read(&self) -> Result<Vec<u8>, UploadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| UploadError::ReadFile {
                path: self.path.clone(),
                source,
            })
    }
}

/// True when the extension is `pdf`, ignoring case.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

pub fn content_type_for(path: &Path) -> &'static str {
    if is_pdf_path(path) {
        PDF_MIME
    } else {
        OCTET_STREAM_MIME
    }
}
