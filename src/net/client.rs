// RetinaLens - net/client.rs
//
// The one outbound request this client makes: a multipart POST of the
// selected image to `{base}/predict`.
//
// Blocking reqwest, always called from the upload worker thread, never from
// the UI thread. A fresh client per request is fine at one request at a
// time; the bounded timeout covers connect through body read.

use crate::core::model::{Grade, PredictionResult};
use crate::util::constants;
use crate::util::error::RequestError;
use std::time::Duration;

/// POST the image bytes to the prediction endpoint and parse the response.
///
/// Success is any 2xx status with a well-formed JSON prediction body.
/// Everything else maps onto a `RequestError` variant; the caller decides
/// what the user sees.
pub fn request_prediction(
    base_url: &str,
    filename: &str,
    bytes: Vec<u8>,
    timeout: Duration,
) -> Result<PredictionResult, RequestError> {
    let endpoint = format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        constants::PREDICT_PATH
    );

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| RequestError::Network { source })?;

    let part = reqwest::blocking::multipart::Part::bytes(bytes)
        .file_name(filename.to_string())
        .mime_str("application/octet-stream")
        .map_err(|source| RequestError::Network { source })?;
    let form = reqwest::blocking::multipart::Form::new().part("file", part);

    tracing::debug!(endpoint = %endpoint, filename = %filename, "Sending prediction request");

    let response = client
        .post(&endpoint)
        .multipart(form)
        .send()
        .map_err(|source| RequestError::Network { source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Status {
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .map_err(|source| RequestError::Network { source })?;
    let result: PredictionResult =
        serde_json::from_str(&body).map_err(|source| RequestError::MalformedBody { source })?;

    if result.grade() == Grade::Unknown {
        tracing::warn!(
            class = result.prediction_class,
            "Service returned an out-of-range grade; will display as Unknown"
        );
    }

    Ok(result)
}
