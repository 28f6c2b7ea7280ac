// RetinaLens - ui/panels/mod.rs

pub mod about;
pub mod preview;
pub mod result;
pub mod upload;
