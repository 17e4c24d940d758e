// src/core/mod.rs

pub mod clock;
pub mod sanitize;

pub use clock::{clock_time, pause, timestamp};
