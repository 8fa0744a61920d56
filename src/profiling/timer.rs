//! Start/stop interval timer on the platform's monotonic clock.
//!
//! `std::time::Instant` maps to the highest-resolution monotonic source the OS
//! offers (`clock_gettime(CLOCK_MONOTONIC)` on Linux, `mach_absolute_time` on
//! macOS, `QueryPerformanceCounter` on Windows), which is what sub-microsecond
//! intervals at small vector sizes need.

use std::time::{Duration, Instant};

use crate::error::{BenchError, BenchResult};

/// Interval timer: idle -> `start()` -> running -> `stop()` -> stopped.
///
/// Elapsed queries on a running timer return the partial interval up to now;
/// on a stopped timer they return the frozen interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer {
    start: Option<Instant>,
    end: Option<Instant>,
    running: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer. Restarts it if already running.
    #[inline(always)]
    pub fn start(&mut self) {
        self.end = None;
        self.running = true;
        self.start = Some(Instant::now());
    }

    /// Freeze the interval.
    #[inline(always)]
    pub fn stop(&mut self) -> BenchResult<()> {
        let now = Instant::now();
        if self.start.is_none() {
            return Err(BenchError::InvalidState("stop() called before start()"));
        }
        self.end = Some(now);
        self.running = false;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> BenchResult<Duration> {
        let start = self
            .start
            .ok_or(BenchError::InvalidState("elapsed queried before start()"))?;
        let end = match (self.running, self.end) {
            (false, Some(end)) => end,
            _ => Instant::now(),
        };
        Ok(end.saturating_duration_since(start))
    }

    pub fn elapsed_nanoseconds(&self) -> BenchResult<u128> {
        Ok(self.elapsed()?.as_nanos())
    }

    pub fn elapsed_milliseconds(&self) -> BenchResult<f64> {
        Ok(self.elapsed_nanoseconds()? as f64 / 1e6)
    }

    pub fn elapsed_seconds(&self) -> BenchResult<f64> {
        Ok(self.elapsed_nanoseconds()? as f64 / 1e9)
    }

    /// `"<label>: <ms> ms"`.
    pub fn report(&self, label: &str) -> BenchResult<String> {
        Ok(format!("{label}: {} ms", self.elapsed_milliseconds()?))
    }

    pub fn print(&self, label: &str) -> BenchResult<()> {
        println!("{}", self.report(label)?);
        Ok(())
    }
}
