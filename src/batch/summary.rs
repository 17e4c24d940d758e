// src/batch/summary.rs
use serde::{Deserialize, Serialize};

/// What became of one planned job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobOutcome {
    /// Result fetched and written to disk.
    Success,
    /// Accepted by the server, but no result came back (failed, timed out, cancelled, unsaved).
    Failed,
    /// Accepted by the server; this run didn't wait for it (GUI quick mode).
    Submitted,
    /// Never reached the server (dry run or submission error).
    NotSubmitted,
}

impl JobOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            JobOutcome::Success => "success",
            JobOutcome::Failed => "failed",
            JobOutcome::Submitted => "submitted",
            JobOutcome::NotSubmitted => "not_submitted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub job_id: Option<String>,
    pub result_file: Option<String>,
    pub status: JobOutcome,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub total_keywords: usize,
    pub locations: Vec<LocationRecord>,
}

/// One submitted job. Jobs that never reached the server only show up
/// under their category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub result_file: Option<String>,
    pub status: JobOutcome,
}

/// `results/batch_summary_<timestamp>.json`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub timestamp: String,
    pub api_host: String,
    pub categories: Vec<CategoryRecord>,
    /// Every planned category x location pair that was reached, submitted or not.
    pub total_jobs: usize,
    pub successful_jobs: usize,
    pub failed_jobs: usize,
    pub jobs: Vec<JobRecord>,
}

impl BatchSummary {
    pub fn new(timestamp: &str, api_host: &str) -> Self {
        Self {
            timestamp: s!(timestamp),
            api_host: s!(api_host),
            categories: Vec::new(),
            total_jobs: 0,
            successful_jobs: 0,
            failed_jobs: 0,
            jobs: Vec::new(),
        }
    }

    /// Jobs the server accepted, whatever happened next.
    pub fn submitted_jobs(&self) -> usize {
        self.jobs.len()
    }

    pub(crate) fn count(&mut self, outcome: JobOutcome) {
        match outcome {
            JobOutcome::Success => self.successful_jobs += 1,
            JobOutcome::Failed => self.failed_jobs += 1,
            JobOutcome::Submitted | JobOutcome::NotSubmitted => {}
        }
    }
}
