// src/api/poll.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use super::JobApi;
use crate::{
    config::options::PollConfig,
    core::pause,
    job::{JobId, JobStatus},
    progress::Progress,
};

#[derive(Clone, Debug, PartialEq)]
pub enum PollOutcome {
    /// The status carried a non-empty `result`.
    Completed(JobStatus),
    /// The server reported `failed`.
    Failed { error: Option<String> },
    /// `PollConfig::timeout` elapsed first.
    TimedOut,
    /// The cancel flag was raised.
    Cancelled,
}

/// Fixed-interval polling bounded by a wall-clock timeout.
///
/// A failed status request is reported and the loop carries on: only the
/// server saying `failed`, a result showing up, the deadline or `cancel`
/// end it. No backoff.
pub fn wait_for_completion(
    api: &dyn JobApi,
    id: &JobId,
    cfg: &PollConfig,
    cancel: &AtomicBool,
    progress: &mut dyn Progress,
) -> PollOutcome {
    say!(progress, "Waiting for job {} to complete...", id);
    // `None` when the timeout is too large to land on the clock: no deadline.
    let deadline = Instant::now().checked_add(cfg.timeout);

    while deadline.is_none_or(|d| Instant::now() < d) {
        if cancel.load(Ordering::Relaxed) {
            logf!("Poll: job {} cancelled", id);
            return PollOutcome::Cancelled;
        }

        match api.status(id) {
            Ok(st) => {
                say!(progress, "Status: {}", st.status_str());
                if st.has_result() {
                    say!(progress, "Job completed!");
                    return PollOutcome::Completed(st);
                }
                if st.is_failed() {
                    let error = st.error_message();
                    say!(progress, "The job has failed");
                    if let Some(e) = &error {
                        say!(progress, "Error: {}", e);
                    }
                    return PollOutcome::Failed { error };
                }
            }
            Err(e) => {
                loge!("Poll: status check for {} failed: {}", id, e);
                progress.log(&format!("Error checking status: {e}"));
            }
        }

        let nap = match deadline {
            Some(d) => {
                let now = Instant::now();
                if now >= d {
                    break;
                }
                cfg.interval.min(d - now)
            }
            None => cfg.interval,
        };
        progress.log(&format!("Waiting {} seconds...", secs_label(nap)));
        if !pause(nap, cancel) {
            logf!("Poll: job {} cancelled", id);
            return PollOutcome::Cancelled;
        }
    }

    say!(progress, "Timed out waiting for job {}", id);
    PollOutcome::TimedOut
}

/// GUI quick mode: give the server `delay` to pick the job up, then ask once.
/// `None` when cancelled during the delay or when the check itself errors.
pub fn check_once(
    api: &dyn JobApi,
    id: &JobId,
    delay: Duration,
    cancel: &AtomicBool,
    progress: &mut dyn Progress,
) -> Option<JobStatus> {
    say!(progress, "Waiting for the job to be picked up...");
    if !pause(delay, cancel) {
        return None;
    }
    match api.status(id) {
        Ok(st) => {
            say!(progress, "Status: {}", st.status_str());
            Some(st)
        }
        Err(e) => {
            loge!("Poll: quick check for {} failed: {}", id, e);
            progress.log(&format!("Could not check status, moving on: {e}"));
            None
        }
    }
}

fn secs_label(d: Duration) -> String {
    if d.subsec_millis() == 0 {
        d.as_secs().to_string()
    } else {
        format!("{:.1}", d.as_secs_f64())
    }
}
