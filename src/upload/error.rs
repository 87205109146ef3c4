use std::path::PathBuf;
use thiserror::Error;

/// The only failure text ever shown to the user.
pub const UPLOAD_FAILED_MESSAGE: &str = "Error uploading file or summarizing.";

/// Everything that can go wrong between reading the file and holding a summary.
///
/// `Display` carries the diagnostic detail for logs; the UI uses
/// [`UploadError::user_message`], which is identical for every variant.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to build multipart body: {0}")]
    Form(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to parse response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response has no summary{}", server_detail(.detail))]
    MissingSummary { detail: Option<String> },

    #[error("Upload worker unavailable: {reason}")]
    WorkerUnavailable { reason: String },
}

fn server_detail(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(" (server error: {})", detail),
        None => String::new(),
    }
}

impl UploadError {
    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        UPLOAD_FAILED_MESSAGE
    }

    /// Short category name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::ReadFile { .. } => "read_file",
            UploadError::Client(_) => "client",
            UploadError::Form(_) => "form",
            UploadError::Transport(_) => "transport",
            UploadError::Status { .. } => "status",
            UploadError::Decode(_) => "decode",
            UploadError::MissingSummary { .. } => "missing_summary",
            UploadError::WorkerUnavailable { .. } => "worker_unavailable",
        }
    }
}
