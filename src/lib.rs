// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod error;
pub mod config;
pub mod core;

pub mod file;
pub mod catalog;
pub mod job;
pub mod progress;
pub mod api;
pub mod store;
pub mod selection;
pub mod batch;
pub mod prompt;
pub mod cli;
pub mod gui;

pub use error::{Error, Result};
