// src/job/request.rs
use serde::{Deserialize, Serialize};

use crate::{
    catalog::Location,
    config::consts::*,
};

/// Every key the server expects in a job body, in wire order.
pub const REQUIRED_FIELDS: [&str; 12] = [
    "name", "keywords", "lang", "zoom", "lat", "lon",
    "fast_mode", "radius", "depth", "email", "max_time", "proxies",
];

/// Knobs shared by every job in a run. The semantics belong to the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParams {
    pub lang: String,
    pub fast_mode: bool,
    /// Metres.
    pub radius: u32,
    pub depth: u32,
    pub email: bool,
    /// Minutes the server may spend on the job.
    pub max_time: u32,
    pub proxies: Vec<String>,
}

impl Default for JobParams {
    fn default() -> Self {
        Self {
            lang: s!(DEFAULT_LANG),
            fast_mode: DEFAULT_FAST_MODE,
            radius: DEFAULT_RADIUS,
            depth: DEFAULT_DEPTH,
            email: DEFAULT_EMAIL,
            max_time: DEFAULT_MAX_TIME_MIN,
            proxies: Vec::new(),
        }
    }
}

/// Body of `POST /api/v1/jobs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequest {
    pub name: String,
    pub keywords: Vec<String>,
    pub lang: String,
    pub zoom: u32,
    pub lat: String,
    pub lon: String,
    pub fast_mode: bool,
    pub radius: u32,
    pub depth: u32,
    pub email: bool,
    pub max_time: u32,
    pub proxies: Vec<String>,
}

impl JobRequest {
    pub fn new(name: impl Into<String>, keywords: Vec<String>, location: &Location, params: &JobParams) -> Self {
        Self {
            name: name.into(),
            keywords,
            lang: params.lang.clone(),
            zoom: location.zoom,
            lat: location.lat.clone(),
            lon: location.lon.clone(),
            fast_mode: params.fast_mode,
            radius: params.radius,
            depth: params.depth,
            email: params.email,
            max_time: params.max_time,
            proxies: params.proxies.clone(),
        }
    }

    /// First `n` keywords joined for display, with `...` when there are more.
    pub fn keywords_preview(&self, n: usize) -> String {
        let mut out = self.keywords.iter().take(n).cloned().collect::<Vec<_>>().join(", ");
        if self.keywords.len() > n {
            out.push_str("...");
        }
        out
    }
}

/// `<prefix>_<category>_<location>_<timestamp>`, or `Job_...` without a prefix.
/// A prefix that already ends in `_` is not doubled.
pub fn job_name(prefix: &str, category: &str, location: &str, timestamp: &str) -> String {
    let prefix = prefix.trim();
    let stem = if prefix.is_empty() { DEFAULT_JOB_STEM } else { prefix.trim_end_matches('_') };
    format!("{stem}_{category}_{location}_{timestamp}")
}
