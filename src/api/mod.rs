// src/api/mod.rs
//! Talking to the remote job service.
//!
//! `JobApi` is the seam: `ApiClient` speaks HTTP, tests script a fake.
//! The poll loop only ever sees the trait.

mod client;
mod poll;

pub use client::ApiClient;
pub use poll::{PollOutcome, check_once, wait_for_completion};

use crate::{
    Result,
    job::{JobId, JobRequest, JobStatus},
};

pub trait JobApi {
    /// Create a job. `Ok` only when the server answered 200/201 with an id.
    fn submit(&self, request: &JobRequest) -> Result<JobId>;

    /// Current state of a job. `Ok` only on 200.
    fn status(&self, id: &JobId) -> Result<JobStatus>;
}

impl<T: JobApi + ?Sized> JobApi for &T {
    fn submit(&self, request: &JobRequest) -> Result<JobId> {
        (**self).submit(request)
    }

    fn status(&self, id: &JobId) -> Result<JobStatus> {
        (**self).status(id)
    }
}
