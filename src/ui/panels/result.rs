// RetinaLens - ui/panels/result.rs
//
// Diagnosis result card: grade label in its accent colour, grade badge,
// and the confidence score with a filled bar. Drawn only in the succeeded
// phase; a new submission removes it until the next outcome.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the diagnosis card for the current result, if any.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(result) = state.result() else {
        return;
    };

    let grade = result.grade();
    let colour = theme::grade_colour(grade);

    egui::Frame::group(ui.style())
        .fill(theme::grade_bg_colour(grade))
        .stroke(egui::Stroke::new(1.0, colour))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("DIAGNOSIS RESULT").small().weak());
                ui.add_space(6.0);

                // The service's label is authoritative; fall back to the
                // grade table only if it sent an empty string.
                let label = if result.prediction_label.is_empty() {
                    grade.label()
                } else {
                    &result.prediction_label
                };
                ui.label(egui::RichText::new(label).size(26.0).strong().color(colour));
                ui.add_space(2.0);
                ui.label(
                    egui::RichText::new(format!("Grade {}", result.prediction_class))
                        .size(13.0)
                        .color(colour),
                );

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);

                ui.label("AI Confidence Score");
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(result.confidence_percent())
                        .size(20.0)
                        .strong(),
                );
                ui.add_space(4.0);
                // The bar fill clamps; the number above shows the raw value.
                ui.add(
                    egui::ProgressBar::new(result.confidence.clamp(0.0, 1.0) as f32)
                        .desired_height(theme::CONFIDENCE_BAR_HEIGHT)
                        .fill(colour),
                );

                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new(format!("Analyzed: {}", result.filename))
                        .small()
                        .weak(),
                );
            });
        });
}
