// src/store.rs
//! Everything that lands under `results/`: one JSON file per finished job and
//! one summary per batch run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    Result,
    batch::BatchSummary,
    core::sanitize::sanitize_component,
    file::{ensure_directory, unique_path, write_json},
};

/// Tag for single-job runs: the first two keywords, spaces as `_`, joined by `_`.
pub fn keywords_tag(keywords: &[String]) -> String {
    keywords
        .iter()
        .take(2)
        .map(|k| k.replace(' ', "_"))
        .collect::<Vec<_>>()
        .join("_")
}

/// Write the server's `result` verbatim to
/// `<dir>/results_<location>_<tag>_<timestamp>.json` and return the path.
pub fn save_job_result(
    dir: &Path,
    location: &str,
    tag: &str,
    timestamp: &str,
    result: &Value,
) -> Result<PathBuf> {
    ensure_directory(dir)?;

    let location = or_placeholder(sanitize_component(location), "location");
    let tag = or_placeholder(sanitize_component(tag), "job");
    let stem = format!("results_{location}_{tag}_{timestamp}");

    let path = unique_path(dir, &stem, "json");
    write_json(&path, result)?;
    logf!("Store: Saved job result → {}", path.display());
    Ok(path)
}

/// `<dir>/batch_summary_<timestamp>.json`
pub fn save_summary(dir: &Path, summary: &BatchSummary) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let stem = format!("batch_summary_{}", summary.timestamp);
    let path = unique_path(dir, &stem, "json");
    write_json(&path, summary)?;
    logf!(
        "Store: Saved batch summary (total={}, ok={}, failed={}) → {}",
        summary.total_jobs,
        summary.successful_jobs,
        summary.failed_jobs,
        path.display()
    );
    Ok(path)
}

pub fn load_summary(path: &Path) -> Result<BatchSummary> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn or_placeholder(s: String, placeholder: &str) -> String {
    if s.is_empty() { s!(placeholder) } else { s }
}
