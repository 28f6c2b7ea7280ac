// RetinaLens - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging; the user
// only ever sees the single fixed message from util::constants.

use std::fmt;

// ---------------------------------------------------------------------------
// Request errors
// ---------------------------------------------------------------------------

/// Errors produced by the prediction request, from connection to body parse.
///
/// Every variant collapses to the same user-facing message; the distinction
/// exists so the log records whether the service was unreachable, rejected
/// the upload, or answered with an unexpected shape.
#[derive(Debug)]
pub enum RequestError {
    /// Connection, TLS, timeout, or transport-level failure.
    Network { source: reqwest::Error },

    /// The service answered with a non-2xx status.
    Status { status: u16 },

    /// The service answered 2xx but the body was not a valid prediction.
    MalformedBody { source: serde_json::Error },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { source } => write!(f, "Request failed: {source}"),
            Self::Status { status } => {
                write!(f, "Prediction service returned HTTP {status}")
            }
            Self::MalformedBody { source } => {
                write!(f, "Unexpected response body: {source}")
            }
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network { source } => Some(source),
            Self::MalformedBody { source } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Preview errors
// ---------------------------------------------------------------------------

/// Errors building the local preview from the selected file's bytes.
///
/// Non-fatal: a failed preview never blocks the upload itself.
#[derive(Debug)]
pub enum PreviewError {
    /// The bytes could not be decoded as a supported image format.
    Decode {
        filename: String,
        source: image::ImageError,
    },
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { filename, source } => {
                write!(f, "Cannot decode '{filename}' for preview: {source}")
            }
        }
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
        }
    }
}
