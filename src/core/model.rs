// RetinaLens - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI.
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Prediction result (wire format of the service response)
// =============================================================================

/// Classifier output for one analyzed image, exactly as the prediction
/// service returns it in its JSON response body.
///
/// Held only in UI state: created from a successful response, replaced by
/// the next submission, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Name of the analyzed file, echoed back by the service.
    pub filename: String,

    /// Severity grade. The five known grades are 0-4; anything else is
    /// displayed as Unknown rather than rejected.
    pub prediction_class: i64,

    /// Human-readable class name supplied by the service.
    pub prediction_label: String,

    /// Classifier confidence for the returned class, nominally in [0, 1].
    /// Not validated client-side; display code clamps the bar fill only.
    pub confidence: f64,
}

impl PredictionResult {
    /// The severity grade for display purposes. Out-of-range classes map
    /// to `Grade::Unknown` so the result panel always has something to draw.
    pub fn grade(&self) -> Grade {
        Grade::from_class(self.prediction_class)
    }

    /// Confidence formatted for display, e.g. `"87.3%"`.
    pub fn confidence_percent(&self) -> String {
        format_confidence(self.confidence)
    }
}

/// Format a [0, 1] confidence as a percentage with one decimal place.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

// =============================================================================
// Grade
// =============================================================================

/// Diabetic retinopathy severity grades, ordered from healthy to worst.
///
/// The numeric classes come from the service; the mapping is fixed here so
/// an out-of-range or garbage class degrades to `Unknown` instead of
/// breaking rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Grade {
    Healthy,
    Mild,
    Moderate,
    Severe,
    Proliferative,
    #[default]
    Unknown,
}

impl Grade {
    /// Maps a numeric prediction class to a grade. Any value outside 0-4
    /// returns `Unknown`.
    pub fn from_class(class: i64) -> Self {
        match class {
            0 => Grade::Healthy,
            1 => Grade::Mild,
            2 => Grade::Moderate,
            3 => Grade::Severe,
            4 => Grade::Proliferative,
            _ => Grade::Unknown,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Healthy => "Healthy",
            Grade::Mild => "Mild",
            Grade::Moderate => "Moderate",
            Grade::Severe => "Severe",
            Grade::Proliferative => "Proliferative",
            Grade::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Upload progress (for UI updates)
// =============================================================================

/// Outcome message sent from the request thread to the UI thread.
#[derive(Debug, Clone)]
pub enum UploadProgress {
    /// The service answered 2xx with a well-formed prediction.
    Completed(PredictionResult),

    /// Anything else: connection failure, non-2xx status, malformed body.
    /// `error` carries the diagnostic detail for logging; the UI shows the
    /// fixed message from util::constants instead.
    Failed { error: String },
}

// =============================================================================
// Tests
// =============================================================================
