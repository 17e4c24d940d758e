// src/batch/run.rs
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;

use super::{
    BatchPlan, PlannedCategory, PlannedLocation,
    summary::{BatchSummary, CategoryRecord, JobOutcome, JobRecord, LocationRecord},
};
use crate::{
    Error, Result,
    api::{ApiClient, JobApi, PollOutcome, check_once, wait_for_completion},
    config::options::{BatchOptions, WaitMode},
    core::{pause, timestamp},
    file::display_name,
    job::{JobId, JobRequest, JobStatus, job_name},
    progress::Progress,
    store,
};

const RULE: &str = "==================================================";

/// How one job went.
struct JobRun {
    id: Option<JobId>,
    result_file: Option<PathBuf>,
    outcome: JobOutcome,
}

impl JobRun {
    fn not_submitted() -> Self {
        Self { id: None, result_file: None, outcome: JobOutcome::NotSubmitted }
    }
}

/// Run every planned pair in order and return the summary (not yet saved).
///
/// `cancel` is checked before each job, and inside every wait.
pub fn run_batch(
    api: &dyn JobApi,
    plan: &BatchPlan,
    opts: &BatchOptions,
    cancel: &AtomicBool,
    progress: &mut dyn Progress,
) -> BatchSummary {
    let mut summary = BatchSummary::new(&timestamp(), &opts.host);
    progress.begin(plan.job_count());
    logf!("Batch: Begin host={} jobs={} dry_run={} mode={:?}",
        opts.host, plan.job_count(), opts.dry_run, opts.wait_mode);

    'categories: for cat in &plan.categories {
        say!(progress, "Processing category: {} ({} keywords)", cat.entry.name, cat.keywords.len());

        let mut record = CategoryRecord {
            name: cat.entry.name.clone(),
            total_keywords: cat.keywords.len(),
            locations: Vec::new(),
        };

        for loc in &plan.locations {
            if cancel.load(Ordering::Relaxed) {
                say!(progress, "Execution cancelled by the user");
                summary.categories.push(record);
                break 'categories;
            }

            summary.total_jobs += 1;
            let name = job_name(&opts.job_prefix, &cat.entry.name, &loc.entry.name, &timestamp());
            let request = JobRequest::new(name, cat.keywords.clone(), &loc.location, &opts.params);

            let run = process_job(api, &request, cat, loc, opts, cancel, progress);

            let result_file = run.result_file.as_deref().map(display_name);
            let job_id = run.id.as_ref().map(|id| id.to_string());

            record.locations.push(LocationRecord {
                name: loc.entry.name.clone(),
                job_id: job_id.clone(),
                result_file: result_file.clone(),
                status: run.outcome,
            });

            if let Some(id) = job_id {
                summary.jobs.push(JobRecord {
                    id,
                    name: request.name.clone(),
                    category: cat.entry.name.clone(),
                    location: loc.entry.name.clone(),
                    result_file,
                    status: run.outcome,
                });
                summary.count(run.outcome);
            }

            progress.item_done(&request.name, run.outcome);

            // Go easy on the API between submissions.
            if !opts.dry_run && run.id.is_some() && !opts.pause_between_jobs.is_zero() {
                progress.log(&format!(
                    "Waiting {} seconds before the next job...",
                    opts.pause_between_jobs.as_secs()
                ));
                pause(opts.pause_between_jobs, cancel);
            }
        }

        summary.categories.push(record);
    }

    logf!("Batch: Done total={} ok={} failed={} submitted={}",
        summary.total_jobs, summary.successful_jobs, summary.failed_jobs, summary.submitted_jobs());
    progress.finish();
    summary
}

fn process_job(
    api: &dyn JobApi,
    request: &JobRequest,
    cat: &PlannedCategory,
    loc: &PlannedLocation,
    opts: &BatchOptions,
    cancel: &AtomicBool,
    progress: &mut dyn Progress,
) -> JobRun {
    progress.log("");
    progress.log(RULE);
    say!(progress, "JOB: {}", request.name);
    progress.log(&format!("Category: {}", cat.entry.name));
    progress.log(&format!("Keywords: {}", request.keywords_preview(3)));
    progress.log(&format!("Total keywords: {}", request.keywords.len()));
    progress.log(&format!("Location: {}", loc.entry.name));
    progress.log(&format!("Coordinates: Lat {}, Lon {}", request.lat, request.lon));
    progress.log(&format!("Zoom: {}, Radius: {}m, Depth: {}", request.zoom, request.radius, request.depth));
    progress.log(RULE);

    if opts.dry_run {
        progress.log("Dry run: the job will not be submitted");
        return JobRun::not_submitted();
    }

    progress.log("Submitting job to the API...");
    let id = match api.submit(request) {
        Ok(id) => id,
        Err(e) => {
            loge!("Batch: Submit failed for {}: {}", request.name, e);
            progress.log(&format!("Could not create the job: {e}"));
            return JobRun::not_submitted();
        }
    };
    logf!("Batch: Job {} created for {}", id, request.name);
    progress.job_submitted(&request.name, &id);

    match opts.wait_mode {
        WaitMode::QuickCheck => {
            check_once(api, &id, opts.quick_check_delay, cancel, progress);
            JobRun { id: Some(id), result_file: None, outcome: JobOutcome::Submitted }
        }
        WaitMode::Full => {
            let outcome = wait_for_completion(api, &id, &opts.poll, cancel, progress);
            let PollOutcome::Completed(status) = outcome else {
                return JobRun { id: Some(id), result_file: None, outcome: JobOutcome::Failed };
            };

            let result = status.result.unwrap_or(Value::Null);
            match store::save_job_result(&opts.results_dir(), &loc.entry.name, &cat.entry.name, &timestamp(), &result) {
                Ok(path) => {
                    say!(progress, "Results saved to: {}", path.display());
                    JobRun { id: Some(id), result_file: Some(path), outcome: JobOutcome::Success }
                }
                Err(e) => {
                    loge!("Batch: Saving result of {} failed: {}", id, e);
                    progress.log(&format!("Could not save results: {e}"));
                    JobRun { id: Some(id), result_file: None, outcome: JobOutcome::Failed }
                }
            }
        }
    }
}

/// Connect, run the plan, save the summary. Shared by the CLI (after its
/// confirmation prompt) and the GUI worker thread.
pub fn execute(
    plan: &BatchPlan,
    opts: &BatchOptions,
    cancel: &AtomicBool,
    progress: &mut dyn Progress,
) -> Result<(BatchSummary, PathBuf)> {
    let summary = if opts.dry_run {
        run_batch(&Offline, plan, opts, cancel, progress)
    } else {
        let api = ApiClient::new(&opts.host)?;
        run_batch(&api, plan, opts, cancel, progress)
    };
    let path = store::save_summary(&opts.results_dir(), &summary)?;
    say!(progress, "Batch summary saved to: {}", path.display());
    Ok((summary, path))
}

/// Stands in for the server on dry runs, where no request is ever made.
struct Offline;

impl JobApi for Offline {
    fn submit(&self, _request: &JobRequest) -> Result<JobId> {
        Err(Error::Invalid(s!("dry run: nothing is sent")))
    }

    fn status(&self, _id: &JobId) -> Result<JobStatus> {
        Err(Error::Invalid(s!("dry run: nothing is sent")))
    }
}
