//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::net::TcpListener;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::sync::mpsc;
use understand::config::Config;
use understand::ui::app::App;
use understand::upload::{UploadRequest, UPLOAD_QUEUE_CAPACITY};

/// Bytes that look enough like a PDF for the endpoint not to care.
pub const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\n%%EOF\n";

/// URL of a port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/OCR", port)
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write fixture");
    path
}

/// A temp dir holding `report.pdf`.
pub fn pdf_fixture() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(dir.path(), "report.pdf", PDF_BYTES);
    (dir, path)
}

// -- App helpers --------------------------------------------------------------

pub fn make_app(start_dir: &Path) -> App {
    let mut config = Config::default();
    config.picker.start_dir = Some(start_dir.to_path_buf());
    App::new(&config)
}

/// App wired to a queue the test drains instead of a real worker.
pub fn make_app_with_queue(start_dir: &Path) -> (App, mpsc::Receiver<UploadRequest>) {
    let mut app = make_app(start_dir);
    let (tx, rx) = mpsc::channel(UPLOAD_QUEUE_CAPACITY);
    app.set_upload_sender(tx);
    (app, rx)
}
