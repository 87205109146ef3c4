//! SummarizeClient against a mock endpoint.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::*;
use understand::upload::{SelectedFile, SummarizeClient, UploadError, UPLOAD_FAILED_MESSAGE};

#[tokio::test]
async fn success_returns_summary_verbatim() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::summary("- point one\n\n   - nested point"))
        .await;
    let (_dir, path) = pdf_fixture();

    let client = SummarizeClient::new(backend.ocr_url()).unwrap();
    let summary = client
        .summarize(&SelectedFile::from_path(&path))
        .await
        .unwrap();

    assert_eq!(summary, "- point one\n\n   - nested point");
}

#[tokio::test]
async fn sends_one_multipart_post_with_file_field() {
    let backend = MockBackend::start().await;
    let (_dir, path) = pdf_fixture();

    let client = SummarizeClient::new(backend.ocr_url()).unwrap();
    client
        .summarize(&SelectedFile::from_path(&path))
        .await
        .unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/OCR");
    assert!(request
        .header("content-type")
        .unwrap()
        .starts_with("multipart/form-data; boundary="));

    let body = request.body_text();
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains(r#"filename="report.pdf""#));
    assert!(body.contains("Content-Type: application/pdf") || body.contains("content-type: application/pdf"));
    assert!(body.contains("%PDF-1.4"));
}

#[tokio::test]
async fn non_pdf_is_sent_as_octet_stream() {
    let backend = MockBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "scan.png", b"\x89PNG");

    let client = SummarizeClient::new(backend.ocr_url()).unwrap();
    client
        .summarize(&SelectedFile::from_path(&path))
        .await
        .unwrap();

    let body = backend.captured_requests().await[0].body_text();
    assert!(body.contains(r#"filename="scan.png""#));
    assert!(body.to_ascii_lowercase().contains("content-type: application/octet-stream"));
}

#[tokio::test]
async fn server_error_fails_even_with_summary_body() {
    let backend = MockBackend::start().await;
    let mut response = MockResponse::summary("should be ignored");
    response.status = 500;
    backend.enqueue_response(response).await;
    let (_dir, path) = pdf_fixture();

    let client = SummarizeClient::new(backend.ocr_url()).unwrap();
    let err = client
        .summarize(&SelectedFile::from_path(&path))
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Status { status: 500 }));
    assert_eq!(err.user_message(), UPLOAD_FAILED_MESSAGE);
}

#[tokio::test]
async fn network_failure_has_same_message_as_http_failure() {
    let (_dir, path) = pdf_fixture();
    let file = SelectedFile::from_path(&path);

    let client = SummarizeClient::new(unreachable_url()).unwrap();
    let network_err = client.summarize(&file).await.unwrap_err();
    assert_eq!(network_err.kind(), "transport");

    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::status(502, "bad gateway"))
        .await;
    let client = SummarizeClient::new(backend.ocr_url()).unwrap();
    let http_err = client.summarize(&file).await.unwrap_err();

    assert_eq!(network_err.user_message(), http_err.user_message());
}

#[tokio::test]
async fn malformed_json_fails() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json("not json at all"))
        .await;
    let (_dir, path) = pdf_fixture();

    let client = SummarizeClient::new(backend.ocr_url()).unwrap();
    let err = client
        .summarize(&SelectedFile::from_path(&path))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "decode");
    assert_eq!(err.user_message(), UPLOAD_FAILED_MESSAGE);
}

#[tokio::test]
async fn ok_status_with_error_body_fails() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"error": "Unsupported file type"}"#))
        .await;
    let (_dir, path) = pdf_fixture();

    let client = SummarizeClient::new(backend.ocr_url()).unwrap();
    let err = client
        .summarize(&SelectedFile::from_path(&path))
        .await
        .unwrap_err();
    match err {
        UploadError::MissingSummary { detail } => {
            assert_eq!(detail.as_deref(), Some("Unsupported file type"));
        }
        other => panic!("Expected MissingSummary, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_file_fails_without_request() {
    let backend = MockBackend::start().await;
    let dir = tempfile::tempdir().unwrap();

    let client = SummarizeClient::new(backend.ocr_url()).unwrap();
    let err = client
        .summarize(&SelectedFile::from_path(dir.path().join("gone.pdf")))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "read_file");
    assert_eq!(err.user_message(), UPLOAD_FAILED_MESSAGE);
    assert!(backend.captured_requests().await.is_empty());
}
