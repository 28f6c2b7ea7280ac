// RetinaLens - core/mod.rs
//
// Core business logic layer: the prediction data model and the
// file-acceptance policy for the upload surface.
// Dependencies: standard library, serde, and util (constants).
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod accept;
pub mod model;
