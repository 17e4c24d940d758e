// tests/poll.rs
//
// The wait loop against a scripted server.
mod common;

use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use serde_json::json;

use common::{FakeApi, Reply, completed, status};
use maps_scrape::api::{PollOutcome, check_once, wait_for_completion};
use maps_scrape::config::options::PollConfig;
use maps_scrape::job::{JobId, JobStatus};
use maps_scrape::progress::{NullProgress, RecordingProgress};

fn fast(timeout_ms: u64) -> PollConfig {
    PollConfig { timeout: Duration::from_millis(timeout_ms), interval: Duration::from_millis(10) }
}

fn id() -> JobId {
    JobId("abc".into())
}

#[test]
fn completes_once_a_result_shows_up() {
    let api = FakeApi::new().with_statuses(vec![
        Reply::Ok(status("pending")),
        Reply::Ok(status("working")),
        Reply::Ok(completed(json!([{"title": "Bar Pepe"}]))),
    ]);
    let cancel = AtomicBool::new(false);
    let mut prog = RecordingProgress::default();

    let out = wait_for_completion(&api, &id(), &fast(5_000), &cancel, &mut prog);

    match out {
        PollOutcome::Completed(st) => assert_eq!(st.result, Some(json!([{"title": "Bar Pepe"}]))),
        other => panic!("expected completion, got {other:?}"),
    }
    assert_eq!(api.status_count(), 3);
    assert!(prog.lines.iter().any(|l| l == "Status: working"));
}

#[test]
fn failed_status_stops_with_the_error() {
    let failed = JobStatus { status: Some("failed".into()), error: Some(json!("boom")), ..JobStatus::default() };
    let api = FakeApi::new().with_statuses(vec![Reply::Ok(failed)]);
    let cancel = AtomicBool::new(false);

    let out = wait_for_completion(&api, &id(), &fast(5_000), &cancel, &mut NullProgress);
    assert_eq!(out, PollOutcome::Failed { error: Some("boom".into()) });
}

#[test]
fn status_errors_do_not_end_the_wait() {
    let api = FakeApi::new().with_statuses(vec![
        Reply::Http(500),
        Reply::Http(404),
        Reply::Ok(completed(json!({"rows": 1}))),
    ]);
    let cancel = AtomicBool::new(false);
    let mut prog = RecordingProgress::default();

    let out = wait_for_completion(&api, &id(), &fast(5_000), &cancel, &mut prog);
    assert!(matches!(out, PollOutcome::Completed(_)));
    assert_eq!(api.status_count(), 3);
    assert!(prog.lines.iter().any(|l| l.starts_with("Error checking status")));
}

#[test]
fn gives_up_at_the_deadline() {
    let api = FakeApi::new();
    let cancel = AtomicBool::new(false);
    let t = Instant::now();

    let out = wait_for_completion(&api, &id(), &fast(120), &cancel, &mut NullProgress);

    assert_eq!(out, PollOutcome::TimedOut);
    assert!(api.status_count() >= 2);
    assert!(t.elapsed() < Duration::from_secs(3));
}

#[test]
fn raised_cancel_flag_stops_before_asking() {
    let api = FakeApi::new();
    let cancel = AtomicBool::new(true);

    let out = wait_for_completion(&api, &id(), &fast(5_000), &cancel, &mut NullProgress);
    assert_eq!(out, PollOutcome::Cancelled);
    assert_eq!(api.status_count(), 0);
}

#[test]
fn quick_check_asks_once() {
    let api = FakeApi::new().with_statuses(vec![Reply::Ok(status("queued"))]);
    let cancel = AtomicBool::new(false);

    let st = check_once(&api, &id(), Duration::ZERO, &cancel, &mut NullProgress);
    assert_eq!(st.map(|s| s.status_str().to_string()), Some("queued".to_string()));
    assert_eq!(api.status_count(), 1);

    let api = FakeApi::new().with_statuses(vec![Reply::Http(503)]);
    assert!(check_once(&api, &id(), Duration::ZERO, &cancel, &mut NullProgress).is_none());

    let cancelled = AtomicBool::new(true);
    let api = FakeApi::new();
    assert!(check_once(&api, &id(), Duration::from_millis(50), &cancelled, &mut NullProgress).is_none());
    assert_eq!(api.status_count(), 0);
}

#[test]
fn timeouts_past_the_clock_still_poll() {
    let api = FakeApi::new().with_statuses(vec![
        Reply::Ok(status("working")),
        Reply::Ok(completed(json!({"ok": true}))),
    ]);
    let cfg = PollConfig { timeout: Duration::MAX, interval: Duration::from_millis(5) };
    let cancel = AtomicBool::new(false);

    let out = wait_for_completion(&api, &id(), &cfg, &cancel, &mut NullProgress);

    assert!(matches!(out, PollOutcome::Completed(_)));
    assert_eq!(api.status_count(), 2);
    assert_eq!(PollConfig::from_minutes(u64::MAX, 10).timeout, Duration::from_secs(u64::MAX));
}
