// RetinaLens - net/mod.rs
//
// Network layer: the single HTTP boundary to the prediction service.
// Dependencies: core (models), util (constants, errors), reqwest.
// Must NOT depend on: ui, app, platform.

pub mod client;
