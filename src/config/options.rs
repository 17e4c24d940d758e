// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::job::JobParams;

/// Which catalog entries a batch runs over. Indices are 1-based, as shown to users.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    All,
    Indices(Vec<usize>),
}

/// `--keywords all` or a comma list of case-insensitive substrings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeywordFilter {
    All,
    Terms(Vec<String>),
}

impl KeywordFilter {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() || text.eq_ignore_ascii_case("all") {
            return KeywordFilter::All;
        }
        let terms: Vec<String> = text
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() { KeywordFilter::All } else { KeywordFilter::Terms(terms) }
    }

    /// Keep a keyword if any term is a substring of it (case-insensitive).
    pub fn apply(&self, keywords: &[String]) -> Vec<String> {
        match self {
            KeywordFilter::All => keywords.to_vec(),
            KeywordFilter::Terms(terms) => keywords
                .iter()
                .filter(|kw| {
                    let lower = kw.to_lowercase();
                    terms.iter().any(|t| lower.contains(t.as_str()))
                })
                .cloned()
                .collect(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            KeywordFilter::All => s!("all"),
            KeywordFilter::Terms(t) => t.join(","),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitMode {
    /// Poll until the job has a result (or fails / times out), then save it.
    Full,
    /// Wait a few seconds, check the status once, move on. Results stay on the server.
    QuickCheck,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollConfig {
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_WAIT_TIME_MIN, POLL_INTERVAL_SECS)
    }
}

impl PollConfig {
    pub fn from_minutes(wait_min: u64, interval_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(wait_min.saturating_mul(60)),
            interval: Duration::from_secs(interval_secs),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    pub host: String,
    /// Directory holding `keywords/`, `location/` and `results/`.
    pub root: PathBuf,
    pub categories: Selector,
    pub locations: Selector,
    pub keywords: KeywordFilter,
    pub job_prefix: String,
    pub params: JobParams,
    pub poll: PollConfig,
    pub wait_mode: WaitMode,
    pub pause_between_jobs: Duration,
    pub quick_check_delay: Duration,
    pub dry_run: bool,
    pub assume_yes: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            host: s!(DEFAULT_HOST),
            root: PathBuf::from("."),
            categories: Selector::All,
            locations: Selector::All,
            keywords: KeywordFilter::All,
            job_prefix: s!(),
            params: JobParams::default(),
            poll: PollConfig::default(),
            wait_mode: WaitMode::Full,
            pause_between_jobs: Duration::from_secs(PAUSE_BETWEEN_JOBS_SECS),
            quick_check_delay: Duration::from_secs(QUICK_CHECK_DELAY_SECS),
            dry_run: false,
            assume_yes: false,
        }
    }
}

impl BatchOptions {
    pub fn keywords_dir(&self) -> PathBuf { self.root.join(KEYWORDS_DIR) }
    pub fn location_dir(&self) -> PathBuf { self.root.join(LOCATION_DIR) }
    pub fn results_dir(&self) -> PathBuf { self.root.join(RESULTS_DIR) }

    /// GUI flavour: fire-and-check, shorter pause between jobs.
    pub fn for_gui() -> Self {
        Self {
            wait_mode: WaitMode::QuickCheck,
            pause_between_jobs: Duration::from_secs(QUICK_CHECK_PAUSE_SECS),
            ..Self::default()
        }
    }
}
