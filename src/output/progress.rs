use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} Validating [{bar:40.cyan/blue}] {pos}/{len} codes ({percent}%)";

/// Progress bar ticked once per validated candidate.
///
/// Drawn on stderr, and hidden in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        Self::with_visibility(total, !quiet && std::io::stderr().is_terminal())
    }

    /// A bar that never draws.
    #[must_use]
    pub fn hidden() -> Self {
        Self::with_visibility(0, false)
    }

    fn with_visibility(total: u64, visible: bool) -> Self {
        let progress_bar = if visible {
            let pb = ProgressBar::new(total);
            let style = ProgressStyle::default_bar()
                .template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░");
            pb.set_style(style);
            pb
        } else {
            ProgressBar::hidden()
        };

        Self {
            progress_bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Sets the total once the number of candidates is known.
    pub fn set_length(&self, total: u64) {
        self.progress_bar.set_length(total);
    }

    /// Safe to call from rayon workers.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
