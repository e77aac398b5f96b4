//! Wall-clock timing for simulation steps.
//!
//! Provides an RAII-style profiling scope that reports its elapsed time at
//! trace level when dropped.

use std::time::{Duration, Instant};
use tracing::trace;

/// A profiling scope that measures elapsed time using RAII.
pub struct ProfilerScope {
    start: Instant,
    name: &'static str,
}

impl ProfilerScope {
    /// Creates a new profiling scope.
    pub fn new(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    /// Time since the scope was opened.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Gets elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ProfilerScope {
    fn drop(&mut self) {
        trace!(scope = self.name, elapsed_ms = self.elapsed_ms(), "profiler scope closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_profiler_scope_measures_time() {
        let scope = ProfilerScope::new("test");
        thread::sleep(Duration::from_millis(10));
        let elapsed = scope.elapsed_ms();
        assert!(elapsed >= 10.0, "Expected at least 10ms, got {elapsed}");
        assert!(scope.elapsed() >= Duration::from_millis(10));
    }
}
