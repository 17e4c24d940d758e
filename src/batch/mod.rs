// src/batch/mod.rs
//! Categories x locations, one job per pair, strictly one at a time.
//!
//! ```text
//! CLI / GUI → BatchPlan::build (reads files) → run_batch → store::save_summary
//!                                               ↘ api::{submit, wait_for_completion}
//!                                               ↘ store::save_job_result
//! ```
//!
//! Nothing here aborts a run: a file that can't be read drops out of the
//! plan, a job that can't be submitted or doesn't finish is recorded as such,
//! and the loop moves on to the next pair.

mod plan;
mod run;
mod summary;

pub use plan::{BatchPlan, PlannedCategory, PlannedLocation};
pub use run::{execute, run_batch};
pub use summary::{BatchSummary, CategoryRecord, JobOutcome, JobRecord, LocationRecord};
