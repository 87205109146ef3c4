//! Document upload to the summarization endpoint.
//!
//! - `document.rs` - the file handle chosen by the user
//! - `client.rs` - multipart POST and response decoding
//! - `error.rs` - failure taxonomy, collapsed to one user-facing message
//! - `worker.rs` - background task executing queued uploads

mod client;
mod document;
mod error;
mod worker;

pub use client::SummarizeClient;
pub use document::{content_type_for, is_pdf_path, SelectedFile, OCTET_STREAM_MIME, PDF_MIME};
pub use error::{UploadError, UPLOAD_FAILED_MESSAGE};
pub use worker::{
    run_worker, UploadOutcome, UploadRequest, UploadRequestSender, UPLOAD_QUEUE_CAPACITY,
};
