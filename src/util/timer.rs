//! Wall-clock timing helpers.

use std::time::{Duration, Instant};

use log::debug;

/// A simple stopwatch.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    started_at: Instant,
}

impl Timer {
    /// Start timing now.
    pub fn start() -> Self {
        Timer {
            started_at: Instant::now(),
        }
    }

    /// Time elapsed since [`start`](Self::start).
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Logs the elapsed time of a scope at debug level when dropped.
///
/// ```
/// use lancea::util::ScopedTimer;
///
/// {
///     let _timer = ScopedTimer::new("indexing");
///     // ... work ...
/// } // logs: indexing took 1.234ms
/// ```
#[derive(Debug)]
pub struct ScopedTimer {
    label: &'static str,
    timer: Timer,
}

impl ScopedTimer {
    /// Start a scoped timer with the given label.
    pub fn new(label: &'static str) -> Self {
        ScopedTimer {
            label,
            timer: Timer::start(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        debug!("{} took {:.3?}", self.label, self.timer.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_is_monotonic() {
        let timer = Timer::start();
        let first = timer.elapsed();
        let second = timer.elapsed();
        assert!(second >= first);
    }
}
