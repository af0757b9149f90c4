//! Bulk-load progress display.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress scope around a bulk recipe load.
///
/// The bar is cleared when the scope is dropped, so it is released on every
/// exit path, including early returns and unwinding out of the load loop.
/// Progress is cosmetic: nothing about the load depends on it.
pub struct LoadProgress {
    bar: ProgressBar,
    start_time: Instant,
}

impl LoadProgress {
    /// Enter a progress scope for `total` steps.
    pub fn start(label: &str, total: u64, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
            if let Ok(style) =
                ProgressStyle::with_template("{spinner:.magenta} {msg} [{bar:30}] {pos}/{len}")
            {
                bar.set_style(style.progress_chars("=> "));
            }
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(label.to_string());

        Self {
            bar,
            start_time: Instant::now(),
        }
    }

    /// A scope that never draws.
    pub fn hidden(total: u64) -> Self {
        Self::start("", total, false)
    }

    /// Advance by one step.
    pub fn step(&self) {
        self.bar.inc(1);
    }

    /// Steps completed so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Drop for LoadProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Format a duration for display (e.g. "350ms", "2.4s").
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.1}s", duration.as_secs_f64())
    }
}
