// src/core/clock.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;

use crate::config::consts::{CLOCK_FMT, SLEEP_SLICE_MS, TIMESTAMP_FMT};

/// `YYYYmmdd_HHMMSS`, local time. Used in job names and output file names.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FMT).to_string()
}

/// `HH:MM:SS`, local time. Prefix for GUI log lines.
pub fn clock_time() -> String {
    Local::now().format(CLOCK_FMT).to_string()
}

/// Sleep for `dur`, waking every slice to check `cancel`.
/// Returns `false` if cancelled before the full duration elapsed.
pub fn pause(dur: Duration, cancel: &AtomicBool) -> bool {
    let until = Instant::now() + dur;
    let slice = Duration::from_millis(SLEEP_SLICE_MS);
    loop {
        if cancel.load(Ordering::Relaxed) {
            return false;
        }
        let now = Instant::now();
        if now >= until {
            return true;
        }
        thread::sleep(slice.min(until - now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_shape() {
        let ts = timestamp();
        assert_eq!(ts.len(), 15);
        assert_eq!(&ts[8..9], "_");
    }

    #[test]
    fn pause_returns_early_when_cancelled() {
        let cancel = AtomicBool::new(true);
        let t = Instant::now();
        assert!(!pause(Duration::from_secs(5), &cancel));
        assert!(t.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn pause_zero_completes() {
        let cancel = AtomicBool::new(false);
        assert!(pause(Duration::ZERO, &cancel));
    }
}
