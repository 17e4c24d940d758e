// tests/common/mod.rs
//
// Shared fixtures: a scripted JobApi and catalog directories on disk.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use maps_scrape::{
    Error, Result,
    api::JobApi,
    job::{JobId, JobRequest, JobStatus},
};

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("maps_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// `root/keywords/<n>_keywords_<name>.txt` and `root/location/<n>_location_<name>.txt`.
pub fn write_catalog(root: &PathBuf, categories: &[(&str, &str)], locations: &[(&str, &str)]) {
    let kw = root.join("keywords");
    let loc = root.join("location");
    fs::create_dir_all(&kw).unwrap();
    fs::create_dir_all(&loc).unwrap();
    for (i, (name, body)) in categories.iter().enumerate() {
        fs::write(kw.join(format!("{}_keywords_{}.txt", i + 1, name)), body).unwrap();
    }
    for (i, (name, body)) in locations.iter().enumerate() {
        fs::write(loc.join(format!("{}_location_{}.txt", i + 1, name)), body).unwrap();
    }
}

pub fn status(state: &str) -> JobStatus {
    JobStatus { status: Some(state.to_string()), ..JobStatus::default() }
}

pub fn completed(result: Value) -> JobStatus {
    JobStatus { status: Some("completed".to_string()), result: Some(result), ..JobStatus::default() }
}

pub enum Reply<T> {
    Ok(T),
    Http(u16),
}

/// Answers from a script; once a script runs dry, submits get `job-<n>` and
/// status checks get `pending`.
#[derive(Default)]
pub struct FakeApi {
    submits: Mutex<VecDeque<Reply<String>>>,
    statuses: Mutex<VecDeque<Reply<JobStatus>>>,
    pub requests: Mutex<Vec<JobRequest>>,
    pub status_calls: Mutex<usize>,
    /// Raised on every status check, as a user hitting Cancel mid-wait.
    cancel_on_status: Option<Arc<AtomicBool>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submits(self, replies: Vec<Reply<String>>) -> Self {
        *self.submits.lock().unwrap() = replies.into();
        self
    }

    pub fn with_statuses(self, replies: Vec<Reply<JobStatus>>) -> Self {
        *self.statuses.lock().unwrap() = replies.into();
        self
    }

    pub fn cancelling_on_status(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_on_status = Some(flag);
        self
    }

    pub fn submit_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn status_count(&self) -> usize {
        *self.status_calls.lock().unwrap()
    }
}

impl JobApi for FakeApi {
    fn submit(&self, request: &JobRequest) -> Result<JobId> {
        let mut reqs = self.requests.lock().unwrap();
        reqs.push(request.clone());
        let n = reqs.len();
        match self.submits.lock().unwrap().pop_front() {
            Some(Reply::Ok(id)) => Ok(JobId(id)),
            Some(Reply::Http(code)) => Err(Error::Http { status: code, body: "scripted".into() }),
            None => Ok(JobId(format!("job-{n}"))),
        }
    }

    fn status(&self, _id: &JobId) -> Result<JobStatus> {
        *self.status_calls.lock().unwrap() += 1;
        if let Some(flag) = &self.cancel_on_status {
            flag.store(true, Ordering::Relaxed);
        }
        match self.statuses.lock().unwrap().pop_front() {
            Some(Reply::Ok(st)) => Ok(st),
            Some(Reply::Http(code)) => Err(Error::Http { status: code, body: "scripted".into() }),
            None => Ok(status("pending")),
        }
    }
}
