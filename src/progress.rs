// src/progress.rs
use crate::batch::JobOutcome;
use crate::job::JobId;

/// Lightweight progress reporting used by long-running operations (batch runs, polling).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of planned jobs.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// The server accepted a job and gave it an id.
    fn job_submitted(&mut self, _name: &str, _id: &JobId) {}

    /// Called when one planned job is finished with, whatever happened to it.
    fn item_done(&mut self, _name: &str, _outcome: JobOutcome) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints every line to stdout. Used by the CLI.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn job_submitted(&mut self, _name: &str, id: &JobId) {
        println!("Job created with ID: {id}");
    }
    fn item_done(&mut self, name: &str, outcome: JobOutcome) {
        self.done += 1;
        println!("[{}/{}] {} → {}", self.done, self.total, name, outcome.as_str());
    }
}

/// Records every line; handy in tests and for callers that want the transcript.
#[derive(Default, Debug)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub submitted: Vec<(String, JobId)>,
    pub done: Vec<(String, JobOutcome)>,
    pub total: usize,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn job_submitted(&mut self, name: &str, id: &JobId) { self.submitted.push((s!(name), id.clone())); }
    fn item_done(&mut self, name: &str, outcome: JobOutcome) { self.done.push((s!(name), outcome)); }
    fn finish(&mut self) { self.finished = true; }
}
