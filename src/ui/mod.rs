// RetinaLens - ui/mod.rs
//
// UI layer: panels and theming for the egui interface.
// Dependencies: app (state), core (models), egui.
// Must NOT depend on: net, platform.

pub mod panels;
pub mod theme;
