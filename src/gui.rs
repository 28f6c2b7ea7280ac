// RetinaLens - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels and drives the upload lifecycle.

use crate::app::preview::PreviewImage;
use crate::app::state::AppState;
use crate::app::upload::{UploadManager, UploadRequest};
use crate::core::accept;
use crate::core::model::UploadProgress;
use crate::ui;
use crate::util::constants;
use std::path::Path;

/// The RetinaLens application.
pub struct RetinaLensApp {
    pub state: AppState,
    pub upload_manager: UploadManager,
}

impl RetinaLensApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            upload_manager: UploadManager::new(),
        }
    }

    /// Read, preview, and submit the selected file.
    ///
    /// A failed read aborts the submission with a status message. A failed
    /// preview decode does not: the service may still accept the file, so
    /// the request goes out without a preview.
    fn begin_upload(&mut self, path: &Path) {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to read selected file");
                self.state.status_message = format!("Cannot read '{filename}': {e}");
                return;
            }
        };

        let preview = match PreviewImage::from_bytes(&filename, &bytes) {
            Ok(preview) => Some(preview),
            Err(e) => {
                tracing::warn!(error = %e, "Preview decode failed; submitting without preview");
                None
            }
        };

        if !self.state.begin_submission(preview) {
            return;
        }
        self.state.status_message = format!("Analyzing {filename}\u{2026}");

        self.upload_manager.start_upload(UploadRequest {
            api_base_url: self.state.api_base_url.clone(),
            timeout: self.state.request_timeout,
            filename,
            bytes,
        });
    }
}

impl eframe::App for RetinaLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Window-level drops feed the same pending_upload path as the
        // browse button. Ignored while a request is in flight.
        if !self.state.is_loading() {
            let dropped: Vec<_> = ctx.input(|i| {
                i.raw
                    .dropped_files
                    .iter()
                    .filter_map(|f| f.path.clone())
                    .collect()
            });
            if let Some(path) = accept::select_single_image(&dropped) {
                self.state.pending_upload = Some(path);
            }
        }

        // Poll the upload outcome.
        for msg in self.upload_manager.poll_progress() {
            match msg {
                UploadProgress::Completed(result) => {
                    tracing::info!(
                        filename = %result.filename,
                        class = result.prediction_class,
                        label = %result.prediction_label,
                        confidence = result.confidence,
                        "Prediction received"
                    );
                    self.state.status_message = format!(
                        "Analysis complete: {} ({}).",
                        result.prediction_label,
                        result.confidence_percent()
                    );
                    self.state.complete(result);
                }
                UploadProgress::Failed { error } => {
                    tracing::error!(error = %error, "Prediction request failed");
                    self.state.status_message = "Analysis failed.".to_string();
                    self.state
                        .fail(constants::ANALYSIS_ERROR_MESSAGE.to_string());
                }
            }
        }

        // A selection made anywhere (panel, drop, menu, CLI) starts here.
        if let Some(path) = self.state.pending_upload.take() {
            self.begin_upload(&path);
        }

        // Repaint while a request is outstanding so the spinner animates
        // and the outcome appears promptly.
        if self.state.is_loading() {
            ctx.request_repaint();
        }

        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    ui.add_enabled_ui(!self.state.is_loading(), |ui| {
                        if ui.button("Open Image\u{2026}").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Images", constants::ACCEPTED_IMAGE_EXTENSIONS)
                                .pick_file()
                            {
                                self.state.pending_upload = Some(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Clear").clicked() {
                            self.state.clear();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.is_loading() {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.state.api_base_url)
                            .small()
                            .weak(),
                    );
                });
            });
        });

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.heading("Diabetic Retinopathy Detection");
                    ui.label(
                        egui::RichText::new("AI-assisted grading of retinal photographs.").weak(),
                    );
                    ui.add_space(16.0);
                });

                ui::panels::upload::render(ui, &mut self.state);
                ui.add_space(16.0);
                ui::panels::preview::render(ui, &mut self.state);
                ui::panels::result::render(ui, &self.state);
                ui.add_space(16.0);
            });
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
