//! One-shot mode: upload a single file and print the summary.

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::ui::app::NO_FILE_SELECTED_MESSAGE;
use crate::upload::{SelectedFile, SummarizeClient};

/// Exit status when the upload fails.
pub const EXIT_UPLOAD_FAILED: u8 = 1;

/// Exit status when no file was given.
pub const EXIT_NO_FILE: u8 = 2;

/// Upload `file` and write the summary to `out`.
///
/// Returns the process exit status. Failures write the generic message to
/// `err` and log the detail.
pub async fn run<O: Write, E: Write>(
    config: &Config,
    file: Option<&Path>,
    out: &mut O,
    err: &mut E,
) -> u8 {
    let Some(path) = file else {
        let _ = writeln!(err, "{}", NO_FILE_SELECTED_MESSAGE);
        return EXIT_NO_FILE;
    };

    let file = SelectedFile::from_path(path);
    let result = match SummarizeClient::new(config.endpoint.url.clone()) {
        Ok(client) => client.summarize(&file).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(summary) => {
            tracing::info!(summary_len = summary.len(), "Summary received");
            let _ = writeln!(out, "{}", summary);
            0
        }
        Err(e) => {
            tracing::error!(kind = e.kind(), error = %e, "Upload failed");
            let _ = writeln!(err, "{}", e.user_message());
            EXIT_UPLOAD_FAILED
        }
    }
}
