use std::sync::Arc;
use tokio::sync::mpsc;

use super::client::SummarizeClient;
use super::document::SelectedFile;
use super::error::UploadError;

/// Bound of the UI → worker queue.
pub const UPLOAD_QUEUE_CAPACITY: usize = 32;

/// One submission queued by the UI.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub request_id: u64,
    pub file: SelectedFile,
}

/// Result of one submission, tagged with the id it was queued under.
#[derive(Debug)]
pub struct UploadOutcome {
    pub request_id: u64,
    pub result: Result<String, UploadError>,
}

pub type UploadRequestSender = mpsc::Sender<UploadRequest>;

/// Execute queued uploads until the sending side is dropped.
///
/// Every request runs in its own task, so overlapping submissions proceed
/// concurrently and `report` sees their outcomes in completion order.
pub async fn run_worker<F>(
    client: SummarizeClient,
    mut requests: mpsc::Receiver<UploadRequest>,
    report: F,
) where
    F: Fn(UploadOutcome) + Send + Sync + 'static,
{
    let client = Arc::new(client);
    let report = Arc::new(report);

    while let Some(UploadRequest { request_id, file }) = requests.recv().await {
        let client = Arc::clone(&client);
        let report = Arc::clone(&report);
        tokio::spawn(async move {
            let result = client.summarize(&file).await;
            report(UploadOutcome { request_id, result });
        });
    }

    tracing::debug!("Upload queue closed, worker exiting");
}
