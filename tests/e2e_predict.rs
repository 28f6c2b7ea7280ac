// RetinaLens - tests/e2e_predict.rs
//
// End-to-end tests for the prediction request path.
//
// These tests exercise a real HTTP round trip: a minimal stub service is
// bound to a loopback port and the real reqwest client posts a real
// multipart body to it — no mocks inside the crate under test. This
// exercises the full path from image bytes to a parsed PredictionResult,
// including the background upload thread.

use retinalens::app::state::AppState;
use retinalens::app::upload::{UploadManager, UploadRequest};
use retinalens::core::model::{Grade, UploadProgress};
use retinalens::net::client::request_prediction;
use retinalens::util::error::RequestError;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

const MODERATE_BODY: &str = r#"{"filename":"fundus.jpg","prediction_class":2,"prediction_label":"Moderate","confidence":0.91}"#;

/// Read one HTTP request (headers plus Content-Length body) off the stream.
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).expect("read request");
        assert!(n > 0, "connection closed before headers complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length: usize = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse().ok())?
        })
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).expect("read body");
        assert!(n > 0, "connection closed before body complete");
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf).to_string()
}

/// Serve exactly one request with a canned response, then shut down.
///
/// Returns the base URL and a channel that yields the raw request text.
fn stub_service(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub service");
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request = read_request(&mut stream);

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        let _ = tx.send(request);
    });

    (base_url, rx)
}

fn timeout() -> Duration {
    Duration::from_secs(5)
}

// =============================================================================
// Request E2E
// =============================================================================

/// A 200 response with a well-formed body parses into a PredictionResult.
#[test]
fn e2e_successful_prediction_round_trip() {
    let (base_url, _rx) = stub_service("HTTP/1.1 200 OK", MODERATE_BODY);

    let result = request_prediction(&base_url, "fundus.jpg", vec![0xFF, 0xD8, 0xFF], timeout())
        .expect("request should succeed");

    assert_eq!(result.filename, "fundus.jpg");
    assert_eq!(result.prediction_class, 2);
    assert_eq!(result.prediction_label, "Moderate");
    assert_eq!(result.grade(), Grade::Moderate);
    assert_eq!(result.confidence_percent(), "91.0%");
}

/// The request body is multipart with a `file` part carrying the filename.
#[test]
fn e2e_request_is_multipart_with_file_part() {
    let (base_url, rx) = stub_service("HTTP/1.1 200 OK", MODERATE_BODY);

    request_prediction(&base_url, "left-eye.png", b"pngbytes".to_vec(), timeout())
        .expect("request should succeed");

    let request = rx.recv_timeout(timeout()).expect("captured request");
    assert!(request.starts_with("POST /predict HTTP/1.1\r\n"), "{request}");
    assert!(request.contains("multipart/form-data"), "{request}");
    assert!(request.contains("name=\"file\""), "{request}");
    assert!(request.contains("filename=\"left-eye.png\""), "{request}");
    assert!(request.contains("pngbytes"), "{request}");
}

/// A trailing slash on the base URL does not double up in the endpoint.
#[test]
fn e2e_trailing_slash_base_url_is_normalised() {
    let (base_url, rx) = stub_service("HTTP/1.1 200 OK", MODERATE_BODY);

    request_prediction(
        &format!("{base_url}/"),
        "fundus.jpg",
        vec![1, 2, 3],
        timeout(),
    )
    .expect("request should succeed");

    let request = rx.recv_timeout(timeout()).expect("captured request");
    assert!(request.starts_with("POST /predict HTTP/1.1\r\n"), "{request}");
}

/// A server error surfaces as RequestError::Status with the code.
#[test]
fn e2e_server_error_maps_to_status_error() {
    let (base_url, _rx) = stub_service(
        "HTTP/1.1 500 Internal Server Error",
        r#"{"detail":"model not loaded"}"#,
    );

    let err = request_prediction(&base_url, "fundus.jpg", vec![1, 2, 3], timeout())
        .expect_err("500 must fail");

    assert!(
        matches!(err, RequestError::Status { status: 500 }),
        "expected Status 500, got {err:?}"
    );
}

/// A 2xx response with a non-prediction body is a MalformedBody error.
#[test]
fn e2e_malformed_success_body_maps_to_malformed_body() {
    let (base_url, _rx) = stub_service("HTTP/1.1 200 OK", "<html>not json</html>");

    let err = request_prediction(&base_url, "fundus.jpg", vec![1, 2, 3], timeout())
        .expect_err("garbage body must fail");

    assert!(
        matches!(err, RequestError::MalformedBody { .. }),
        "expected MalformedBody, got {err:?}"
    );
}

/// An unreachable service is a Network error.
#[test]
fn e2e_unreachable_service_maps_to_network_error() {
    // Bind then drop so the port is known-closed.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = request_prediction(&base_url, "fundus.jpg", vec![1, 2, 3], timeout())
        .expect_err("refused connection must fail");

    assert!(
        matches!(err, RequestError::Network { .. }),
        "expected Network, got {err:?}"
    );
}

// =============================================================================
// Upload lifecycle E2E
// =============================================================================

/// The background upload thread delivers the outcome over the channel and
/// the state machine lands in the succeeded phase.
#[test]
fn e2e_upload_manager_drives_state_to_success() {
    let (base_url, _rx) = stub_service("HTTP/1.1 200 OK", MODERATE_BODY);

    let mut state = AppState::new(base_url.clone(), timeout(), false);
    let mut manager = UploadManager::new();

    assert!(state.begin_submission(None));
    manager.start_upload(UploadRequest {
        api_base_url: base_url,
        timeout: timeout(),
        filename: "fundus.jpg".to_string(),
        bytes: vec![0xFF, 0xD8, 0xFF],
    });

    // Poll as the GUI would, frame by frame, until the outcome arrives.
    let deadline = Instant::now() + timeout();
    let outcome = loop {
        if let Some(msg) = manager.poll_progress().pop() {
            break msg;
        }
        assert!(Instant::now() < deadline, "timed out waiting for outcome");
        thread::sleep(Duration::from_millis(10));
    };

    match outcome {
        UploadProgress::Completed(result) => state.complete(result),
        UploadProgress::Failed { error } => panic!("upload failed: {error}"),
    }

    assert!(!state.is_loading());
    let result = state.result().expect("result stored");
    assert_eq!(result.grade(), Grade::Moderate);
    assert_eq!(result.confidence_percent(), "91.0%");
}

/// A failed upload reports Failed; the state machine keeps the fixed
/// user-facing message, not the diagnostic detail.
#[test]
fn e2e_upload_manager_failure_uses_fixed_message() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let mut state = AppState::new(base_url.clone(), timeout(), false);
    let mut manager = UploadManager::new();

    assert!(state.begin_submission(None));
    manager.start_upload(UploadRequest {
        api_base_url: base_url,
        timeout: timeout(),
        filename: "fundus.jpg".to_string(),
        bytes: vec![1, 2, 3],
    });

    let deadline = Instant::now() + timeout();
    let outcome = loop {
        if let Some(msg) = manager.poll_progress().pop() {
            break msg;
        }
        assert!(Instant::now() < deadline, "timed out waiting for outcome");
        thread::sleep(Duration::from_millis(10));
    };

    match outcome {
        UploadProgress::Completed(_) => panic!("request to a closed port succeeded"),
        UploadProgress::Failed { error } => {
            assert!(!error.is_empty());
            state.fail("Failed to analyze image. Please try again.".to_string());
        }
    }

    assert!(!state.is_loading());
    assert_eq!(
        state.error_message(),
        Some("Failed to analyze image. Please try again.")
    );
}
