// RetinaLens - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "RetinaLens";

/// Application identifier used for config directories.
pub const APP_ID: &str = "RetinaLens";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Prediction service
// =============================================================================

/// Base URL of the prediction service when nothing else is configured.
/// Matches the default local development address of the backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the prediction service base URL.
pub const API_URL_ENV_VAR: &str = "RETINALENS_API_URL";

/// Path of the prediction endpoint, appended to the base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Default per-request timeout in seconds. The service performs model
/// inference per upload, so this is generous rather than snappy.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Minimum user-configurable request timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum user-configurable request timeout (seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// =============================================================================
// Upload surface
// =============================================================================

/// File extensions the upload surface accepts (lower-case, no dot).
pub const ACCEPTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Advisory upload size shown on the drop zone. Label text only; the
/// client does not enforce it and the service is the authority on limits.
pub const ADVISORY_MAX_FILE_SIZE_MB: u64 = 10;

// =============================================================================
// User-facing messages
// =============================================================================

/// The single message shown for every failed analysis, regardless of cause.
/// Connectivity failures, server errors, and malformed bodies all collapse
/// to this; the typed detail goes to the log instead.
pub const ANALYSIS_ERROR_MESSAGE: &str = "Failed to analyze image. Please try again.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
