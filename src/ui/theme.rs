// RetinaLens - ui/theme.rs
//
// Colour scheme, grade colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::Grade;
use egui::Color32;

/// Accent colour for a retinopathy grade.
pub fn grade_colour(grade: Grade) -> Color32 {
    match grade {
        Grade::Healthy => Color32::from_rgb(34, 197, 94),        // Green 500
        Grade::Mild => Color32::from_rgb(250, 204, 21),          // Yellow 400
        Grade::Moderate => Color32::from_rgb(251, 146, 60),      // Orange 400
        Grade::Severe => Color32::from_rgb(239, 68, 68),         // Red 500
        Grade::Proliferative => Color32::from_rgb(185, 28, 28),  // Red 800
        Grade::Unknown => Color32::from_rgb(156, 163, 175),      // Gray 400
    }
}

/// Background tint for the result card (subtle, behind the grade text).
pub fn grade_bg_colour(grade: Grade) -> Color32 {
    match grade {
        Grade::Healthy => Color32::from_rgba_premultiplied(34, 197, 94, 20),
        Grade::Mild => Color32::from_rgba_premultiplied(250, 204, 21, 20),
        Grade::Moderate => Color32::from_rgba_premultiplied(251, 146, 60, 20),
        Grade::Severe => Color32::from_rgba_premultiplied(239, 68, 68, 20),
        Grade::Proliferative => Color32::from_rgba_premultiplied(185, 28, 28, 20),
        Grade::Unknown => Color32::from_rgba_premultiplied(156, 163, 175, 15),
    }
}

/// Layout constants.
pub const DROP_ZONE_HEIGHT: f32 = 140.0;
pub const PREVIEW_MAX_SIZE: f32 = 360.0;
pub const CONFIDENCE_BAR_HEIGHT: f32 = 16.0;
