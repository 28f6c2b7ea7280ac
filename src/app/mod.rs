// RetinaLens - app/mod.rs
//
// Application layer: state management and the upload lifecycle.
// Dependencies: core and net layers, egui (preview texture data only).
// Must NOT depend on: ui panels, platform specifics.

pub mod preview;
pub mod state;
pub mod upload;
