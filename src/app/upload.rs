// RetinaLens - app/upload.rs
//
// Background upload management. One request at a time: the GUI guards
// submission through AppState, so the manager never holds more than one
// receiver. Results flow back over an mpsc channel polled each frame.

use crate::core::model::UploadProgress;
use crate::net::client;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Everything the worker thread needs, captured at submission time so the
/// request is unaffected by later state changes.
pub struct UploadRequest {
    pub api_base_url: String,
    pub timeout: Duration,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Manages the background upload thread.
#[derive(Default)]
pub struct UploadManager {
    progress_rx: Option<mpsc::Receiver<UploadProgress>>,
}

impl UploadManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the worker thread for one prediction request.
    ///
    /// Replaces any previous receiver; a stale worker finds its channel
    /// closed on send and exits quietly.
    pub fn start_upload(&mut self, request: UploadRequest) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        tracing::info!(
            filename = %request.filename,
            bytes = request.bytes.len(),
            "Starting prediction upload"
        );

        thread::spawn(move || {
            run_upload(request, tx);
        });
    }

    /// Drain all progress messages received since the last frame.
    pub fn poll_progress(&mut self) -> Vec<UploadProgress> {
        let mut messages = Vec::new();
        if let Some(rx) = &self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

/// Worker thread body. Send failures mean the receiver was replaced or
/// dropped; the outcome is no longer wanted.
fn run_upload(request: UploadRequest, tx: mpsc::Sender<UploadProgress>) {
    let outcome = client::request_prediction(
        &request.api_base_url,
        &request.filename,
        request.bytes,
        request.timeout,
    );

    let message = match outcome {
        Ok(result) => UploadProgress::Completed(result),
        Err(e) => UploadProgress::Failed {
            error: e.to_string(),
        },
    };
    let _ = tx.send(message);
}
