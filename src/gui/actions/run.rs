// src/gui/actions/run.rs
use std::sync::atomic::Ordering;
use std::thread;

use eframe::egui;

use crate::{
    batch::{self, BatchPlan},
    config::{consts::POLL_INTERVAL_SECS, options::PollConfig},
    core::clock_time,
    gui::{app::App, progress::{GuiProgress, locked}},
};

/// Plan on the UI thread (it only reads small files), run on one worker.
pub fn start(app: &mut App, ctx: &egui::Context) {
    if app.is_running() {
        logd!("Run: Ignored, already running");
        return;
    }

    app.sync_selection_into_options();
    let mut opts = app.state.options.clone();
    opts.poll = PollConfig::from_minutes(app.state.gui.wait_time_min, POLL_INTERVAL_SECS);

    let plan = BatchPlan::build(&app.catalog, &opts);
    {
        let mut log = locked(&app.log);
        for note in &plan.notes {
            log.push(format!("[{}] {}", clock_time(), note));
        }
    }
    if plan.is_empty() {
        app.status("Nothing to run: no usable category or location selected");
        return;
    }

    logf!("Run: Begin jobs={} host={} mode={:?}", plan.job_count(), opts.host, opts.wait_mode);
    locked(&app.jobs).clear();
    app.cancel.store(false, Ordering::Relaxed);
    app.running.store(true, Ordering::Relaxed);
    app.status(format!("Starting {} jobs...", plan.job_count()));

    let log = app.log.clone();
    let jobs = app.jobs.clone();
    let status = app.status.clone();
    let running = app.running.clone();
    let cancel = app.cancel.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(log, jobs, status.clone(), ctx.clone());

        let msg = match batch::execute(&plan, &opts, &cancel, &mut prog) {
            Ok((summary, path)) => format!(
                "Done: {} jobs, {} submitted, {} ok, {} failed. Summary: {}",
                summary.total_jobs,
                summary.submitted_jobs(),
                summary.successful_jobs,
                summary.failed_jobs,
                path.display()
            ),
            Err(e) => {
                loge!("Run: {}", e);
                crate::progress::Progress::log(&mut prog, &format!("Error: {e}"));
                format!("Error: {e}")
            }
        };

        *locked(&status) = msg;
        running.store(false, Ordering::Relaxed);
        ctx.request_repaint();
    });
}

/// Cooperative: the worker stops before the next job or during its current wait.
pub fn cancel(app: &App) {
    if !app.is_running() { return; }
    app.cancel.store(true, Ordering::Relaxed);
    app.status("Cancelling...");
    logf!("Run: Cancel requested");
}
