// src/gui/progress.rs
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use eframe::egui;

use crate::{
    batch::JobOutcome,
    core::clock_time,
    job::JobId,
    progress::Progress,
};

/// One line in the Execution tab's jobs table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobRow {
    pub time: String,
    pub name: String,
    pub id: String,
    pub status: String,
}

/// A poisoned lock only means a worker panicked mid-push; the data is still fine to show.
pub fn locked<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Worker-side sink. Everything it touches is shared with the UI thread,
/// which reads it on the next frame.
pub struct GuiProgress {
    log: Arc<Mutex<Vec<String>>>,
    jobs: Arc<Mutex<Vec<JobRow>>>,
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(
        log: Arc<Mutex<Vec<String>>>,
        jobs: Arc<Mutex<Vec<JobRow>>>,
        status: Arc<Mutex<String>>,
        ctx: egui::Context,
    ) -> Self {
        Self { log, jobs, status, ctx, done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        *locked(&self.status) = msg.into();
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.set_status(format!("Running 0/{total}"));
    }

    fn log(&mut self, msg: &str) {
        locked(&self.log).push(format!("[{}] {}", clock_time(), msg));
        self.ctx.request_repaint();
    }

    fn job_submitted(&mut self, name: &str, id: &JobId) {
        locked(&self.jobs).push(JobRow {
            time: clock_time(),
            name: s!(name),
            id: id.to_string(),
            status: s!("submitted"),
        });
        self.ctx.request_repaint();
    }

    fn item_done(&mut self, name: &str, outcome: JobOutcome) {
        self.done += 1;
        if let Some(row) = locked(&self.jobs).iter_mut().rev().find(|r| r.name == name) {
            row.status = s!(outcome.as_str());
        }
        self.set_status(format!("Running {}/{} (last: {})", self.done, self.total, outcome.as_str()));
    }

    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("Batch complete");
        } else {
            self.set_status(format!("Batch complete ({}/{})", self.done, self.total));
        }
    }
}
