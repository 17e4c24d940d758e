// src/job/mod.rs
//! Wire shapes of the job API: what we POST, and what the server reports back.

mod request;
mod status;

pub use request::{JobParams, JobRequest, REQUIRED_FIELDS, job_name};
pub use status::{JobId, JobStatus};
