// RetinaLens - ui/panels/preview.rs
//
// Preview of the selected image plus the transient loading and error
// displays. The preview persists across the whole request lifecycle; the
// spinner and the error banner come and go with the phase.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the image preview, the in-flight spinner, and the error banner.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let ctx = ui.ctx().clone();

    if let Some(preview) = &mut state.preview {
        ui.vertical_centered(|ui| {
            if let Some(texture) = preview.texture(&ctx) {
                ui.add(
                    egui::Image::new(texture)
                        .max_size(egui::vec2(theme::PREVIEW_MAX_SIZE, theme::PREVIEW_MAX_SIZE)),
                );
            }
            ui.add_space(4.0);
            ui.label(egui::RichText::new(preview.filename()).small().weak());
        });
        ui.add_space(12.0);
    }

    if state.is_loading() {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(6.0);
            ui.label("Analyzing retinal structures\u{2026}");
        });
        ui.add_space(12.0);
    }

    if let Some(message) = state.error_message() {
        let error_colour = ui.visuals().error_fg_color;
        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(1.0, error_colour))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Error").color(error_colour).strong());
                    ui.label(message);
                });
            });
        ui.add_space(12.0);
    }
}
