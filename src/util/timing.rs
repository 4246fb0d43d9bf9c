//! Elapsed-time reporting for the `--timing` flag.

use std::time::{Duration, Instant};

/// Format a duration the way the utilities report run time ("Time: 0.12 sec").
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Time: {:.2} sec", elapsed.as_secs_f64())
}

/// Format the time elapsed since `start`.
pub fn elapsed_since(start: Instant) -> String {
    format_elapsed(start.elapsed())
}
