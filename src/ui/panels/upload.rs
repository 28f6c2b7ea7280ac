// RetinaLens - ui/panels/upload.rs
//
// The upload surface: a framed drop zone with a Browse button. Accepts a
// file either way; both routes land in `state.pending_upload`, picked up by
// the GUI loop on the next frame. Disabled while a request is in flight.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the drop zone and browse button.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let drag_active = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let loading = state.is_loading();

    let accent = if drag_active && !loading {
        ui.visuals().selection.stroke.color
    } else {
        ui.visuals().weak_text_color()
    };

    ui.add_enabled_ui(!loading, |ui| {
        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(1.5, accent))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_min_height(theme::DROP_ZONE_HEIGHT);
                ui.set_width(ui.available_width());

                ui.vertical_centered(|ui| {
                    ui.add_space(18.0);
                    let title = if drag_active && !loading {
                        "Drop to analyze"
                    } else {
                        "Upload Retinal Scan"
                    };
                    ui.label(egui::RichText::new(title).size(18.0).strong());
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new("Drag a fundus photograph here, or")
                            .weak(),
                    );
                    ui.add_space(8.0);

                    if ui.button("Browse\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", constants::ACCEPTED_IMAGE_EXTENSIONS)
                            .pick_file()
                        {
                            state.pending_upload = Some(path);
                        }
                    }

                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "JPG \u{00b7} PNG \u{00b7} Max {} MB",
                            constants::ADVISORY_MAX_FILE_SIZE_MB
                        ))
                        .small()
                        .weak(),
                    );
                });
            });
    });
}
