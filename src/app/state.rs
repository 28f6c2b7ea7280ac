// RetinaLens - app/state.rs
//
// Application state management. The upload lifecycle is an explicit
// four-state machine rather than a scatter of booleans: every transition
// goes through a method that validates the current phase, so a stray
// channel message or a double submission can never corrupt the state.
// Owned by the eframe::App implementation.

use crate::app::preview::PreviewImage;
use crate::core::model::PredictionResult;
use std::path::PathBuf;
use std::time::Duration;

/// The four phases of the upload lifecycle.
///
/// Succeeded and Failed are resting states, not terminal ones: the next
/// `begin_submission` discards them and re-enters Submitting.
#[derive(Default)]
pub enum Phase {
    /// Nothing selected, nothing in flight.
    #[default]
    Idle,

    /// A request is outstanding; the upload surface is disabled.
    Submitting,

    /// The service answered with a prediction.
    Succeeded(PredictionResult),

    /// The request failed; `message` is the fixed user-facing text.
    Failed { message: String },
}

/// Top-level application state.
pub struct AppState {
    /// Current lifecycle phase. Private: transitions only via methods.
    phase: Phase,

    /// Local preview of the selected image. Replaced wholesale on each new
    /// submission; dropping the old value releases its texture.
    pub preview: Option<PreviewImage>,

    /// A file selected by a panel, the menu, a window drop, or the CLI.
    /// Consumed by gui.rs each frame; the panels never do I/O themselves.
    pub pending_upload: Option<PathBuf>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Resolved base URL of the prediction service.
    pub api_base_url: String,

    /// Per-request timeout.
    pub request_timeout: Duration,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state with the resolved configuration.
    pub fn new(api_base_url: String, request_timeout: Duration, debug_mode: bool) -> Self {
        Self {
            phase: Phase::Idle,
            preview: None,
            pending_upload: None,
            status_message: "Ready. Drop a retinal photograph or browse to begin.".to_string(),
            api_base_url,
            request_timeout,
            show_about: false,
            debug_mode,
        }
    }

    /// True while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    /// The current prediction, if the last request succeeded.
    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.phase {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// The user-facing error message, if the last request failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Enter Submitting: discard any prior result or error, install the new
    /// preview, mark the request as outstanding.
    ///
    /// Returns false without side effects if a request is already in
    /// flight. The upload surface is disabled during loading so this path
    /// is structurally unreachable; the guard covers disabled-state bypass
    /// (e.g. a queued drop event).
    pub fn begin_submission(&mut self, preview: Option<PreviewImage>) -> bool {
        if self.is_loading() {
            tracing::warn!("Submission requested while a request is in flight; ignored");
            return false;
        }
        self.preview = preview;
        self.phase = Phase::Submitting;
        true
    }

    /// Submitting -> Succeeded. A result arriving in any other phase is
    /// stale (e.g. after Clear) and is discarded.
    pub fn complete(&mut self, result: PredictionResult) {
        if !self.is_loading() {
            tracing::warn!(
                filename = %result.filename,
                "Prediction arrived outside an active submission; discarded"
            );
            return;
        }
        self.phase = Phase::Succeeded(result);
    }

    /// Submitting -> Failed with the fixed user-facing message.
    pub fn fail(&mut self, message: String) {
        if !self.is_loading() {
            tracing::warn!("Failure reported outside an active submission; discarded");
            return;
        }
        self.phase = Phase::Failed { message };
    }

    /// Reset to Idle, releasing the preview texture. Ignored while a
    /// request is in flight so the state cannot desynchronise from the
    /// worker thread.
    pub fn clear(&mut self) {
        if self.is_loading() {
            tracing::warn!("Clear requested while a request is in flight; ignored");
            return;
        }
        self.phase = Phase::Idle;
        self.preview = None;
        self.status_message = "Ready.".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Grade;

    fn state() -> AppState {
        AppState::new(
            "http://localhost:8000".to_string(),
            Duration::from_secs(60),
            false,
        )
    }

    fn moderate_result() -> PredictionResult {
        PredictionResult {
            filename: "a.jpg".to_string(),
            prediction_class: 2,
            prediction_label: "Moderate".to_string(),
            confidence: 0.91,
        }
    }

    #[test]
    fn starts_idle() {
        let s = state();
        assert!(!s.is_loading());
        assert!(s.result().is_none());
        assert!(s.error_message().is_none());
    }

    #[test]
    fn begin_submission_enters_loading_and_clears_prior_outcome() {
        let mut s = state();
        s.begin_submission(None);
        s.complete(moderate_result());
        assert!(s.result().is_some());

        // New selection: result discarded synchronously, loading set.
        assert!(s.begin_submission(None));
        assert!(s.is_loading());
        assert!(s.result().is_none());
        assert!(s.error_message().is_none());
    }

    #[test]
    fn begin_submission_clears_a_prior_error() {
        let mut s = state();
        s.begin_submission(None);
        s.fail("Failed to analyze image. Please try again.".to_string());
        assert!(s.error_message().is_some());

        assert!(s.begin_submission(None));
        assert!(s.error_message().is_none());
        assert!(s.is_loading());
    }

    #[test]
    fn complete_stores_the_result_and_clears_loading() {
        let mut s = state();
        s.begin_submission(None);
        s.complete(moderate_result());
        assert!(!s.is_loading());
        let result = s.result().expect("result stored");
        assert_eq!(result.grade(), Grade::Moderate);
        assert_eq!(result.confidence_percent(), "91.0%");
        assert!(s.error_message().is_none());
    }

    #[test]
    fn fail_stores_the_message_and_clears_loading() {
        let mut s = state();
        s.begin_submission(None);
        s.fail("Failed to analyze image. Please try again.".to_string());
        assert!(!s.is_loading());
        assert_eq!(
            s.error_message(),
            Some("Failed to analyze image. Please try again.")
        );
        assert!(s.result().is_none());
    }

    #[test]
    fn second_submission_while_loading_is_rejected() {
        let mut s = state();
        assert!(s.begin_submission(None));
        assert!(!s.begin_submission(None));
        assert!(s.is_loading());
    }

    #[test]
    fn stale_outcomes_outside_submitting_are_discarded() {
        let mut s = state();
        s.complete(moderate_result());
        assert!(s.result().is_none());

        s.fail("late failure".to_string());
        assert!(s.error_message().is_none());
    }

    #[test]
    fn clear_resets_to_idle_but_not_mid_flight() {
        let mut s = state();
        s.begin_submission(None);
        s.clear(); // ignored: request outstanding
        assert!(s.is_loading());

        s.complete(moderate_result());
        s.clear();
        assert!(s.result().is_none());
        assert!(!s.is_loading());
    }
}
