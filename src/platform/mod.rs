// RetinaLens - platform/mod.rs
//
// Platform layer: config directory resolution and config.toml loading.
// Dependencies: util (constants), directories, toml.
// Must NOT depend on: ui, app, net.

pub mod config;
