// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod model;
pub mod progress;
pub mod router;

pub use app::run;
