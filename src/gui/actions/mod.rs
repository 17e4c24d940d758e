// src/gui/actions/mod.rs
pub mod catalog;
pub mod run;
