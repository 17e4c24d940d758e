// src/gui/components/mod.rs
pub mod categories_panel;
pub mod config_panel;
pub mod execution_panel;
pub mod locations_panel;
pub mod tabs;
