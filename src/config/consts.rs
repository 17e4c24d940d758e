// src/config/consts.rs

// Net config
pub const DEFAULT_HOST: &str = "http://localhost:8000";
pub const JOBS_PATH: &str = "/api/v1/jobs";
pub const USER_AGENT: &str = concat!("maps_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

// Local layout (relative to the working root)
pub const KEYWORDS_DIR: &str = "keywords";
pub const LOCATION_DIR: &str = "location";
pub const RESULTS_DIR: &str = "results";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// File name markers: <prefix>_keywords_<name>.txt, <prefix>_location_<name>.txt
pub const KEYWORDS_MARKER: &str = "keywords";
pub const LOCATION_MARKER: &str = "location";
pub const CATALOG_EXT: &str = "txt";
// Highest index a typed selection may name
pub const MAX_SELECTION_INDEX: usize = 10_000;

// Job payload defaults
pub const DEFAULT_LANG: &str = "es";
pub const DEFAULT_FAST_MODE: bool = true;
pub const DEFAULT_RADIUS: u32 = 10_000;
pub const DEFAULT_DEPTH: u32 = 10;
pub const DEFAULT_EMAIL: bool = true;
pub const DEFAULT_MAX_TIME_MIN: u32 = 15;

// Polling
pub const DEFAULT_WAIT_TIME_MIN: u64 = 30;
pub const MAX_WAIT_TIME_MIN: u64 = 7 * 24 * 60;
pub const POLL_INTERVAL_SECS: u64 = 10;
pub const PAUSE_BETWEEN_JOBS_SECS: u64 = 5;
pub const QUICK_CHECK_DELAY_SECS: u64 = 5;
pub const QUICK_CHECK_PAUSE_SECS: u64 = 2;
pub const SLEEP_SLICE_MS: u64 = 100;

// Naming
pub const TIMESTAMP_FMT: &str = "%Y%m%d_%H%M%S";
pub const CLOCK_FMT: &str = "%H:%M:%S";
pub const DEFAULT_JOB_STEM: &str = "Job";
