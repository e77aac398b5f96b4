//! Run telemetry: per-step reports and the end-of-run summary
//!
//! Every generation yields a `StepReport`. `RunTelemetry` folds those into the
//! running maxima and totals that become the `RunSummary` printed when the
//! run ends, whether the fire burnt out or the run was interrupted.

mod profiler;

pub use profiler::ProfilerScope;

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Outcome of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// 1-based generation number
    pub generation: u64,
    /// Burning tiles visited by the step (see `Stepper::step`)
    pub active_tiles: usize,
    /// Tiles in the grid
    pub total_tiles: usize,
    /// Wall-clock time spent in the step
    pub duration: Duration,
}

impl StepReport {
    /// Active tiles as a fraction of the grid.
    pub fn burning_fraction(&self) -> f32 {
        if self.total_tiles == 0 {
            return 0.0;
        }
        self.active_tiles as f32 / self.total_tiles as f32
    }

    /// Step duration in whole milliseconds.
    pub fn duration_ms(&self) -> u64 {
        duration_to_u64(self.duration.as_millis())
    }

    /// Step duration in whole microseconds.
    pub fn duration_us(&self) -> u64 {
        duration_to_u64(self.duration.as_micros())
    }

    /// True once a step finds nothing burning.
    pub fn is_extinguished(&self) -> bool {
        self.active_tiles == 0
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})\t{}ms\t{}us",
            self.burning_fraction(),
            self.duration_ms(),
            self.duration_us()
        )
    }
}

/// Whether `generation` gets a report line at the given interval.
///
/// Reports fall on generations 1, 1 + interval, 1 + 2 × interval, and so on.
/// An interval of 0 disables reporting.
pub fn is_report_step(generation: u64, interval: u32) -> bool {
    interval != 0 && generation.saturating_sub(1) % u64::from(interval) == 0
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunOutcome {
    /// A step found no burning tiles
    Extinguished,
    /// The cancel flag was raised between generations
    Cancelled,
}

/// Running statistics over all executed steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTelemetry {
    steps: u64,
    total_duration: Duration,
    max_duration: Duration,
    max_active_tiles: usize,
}

impl RunTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one step into the running statistics.
    pub fn record(&mut self, report: &StepReport) {
        self.steps += 1;
        self.total_duration += report.duration;
        self.max_duration = self.max_duration.max(report.duration);
        self.max_active_tiles = self.max_active_tiles.max(report.active_tiles);
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn max_active_tiles(&self) -> usize {
        self.max_active_tiles
    }

    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }

    /// Mean step duration; zero before the first step.
    pub fn average_duration(&self) -> Duration {
        match u32::try_from(self.steps) {
            Ok(0) => Duration::ZERO,
            Ok(steps) => self.total_duration / steps,
            Err(_) => self.total_duration.div_f64(self.steps as f64),
        }
    }

    /// Freeze the statistics into a summary.
    pub fn summary(&self, outcome: RunOutcome, seed: u64) -> RunSummary {
        RunSummary {
            steps: self.steps,
            average_step_us: duration_to_u64(self.average_duration().as_micros()),
            max_step_us: duration_to_u64(self.max_duration.as_micros()),
            max_active_tiles: self.max_active_tiles,
            outcome,
            seed,
        }
    }
}

/// End-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Generations executed, including the final one that found nothing burning
    pub steps: u64,
    /// Mean step duration in microseconds
    pub average_step_us: u64,
    /// Longest step duration in microseconds
    pub max_step_us: u64,
    /// Largest active-tile count reported by any step
    pub max_active_tiles: usize,
    pub outcome: RunOutcome,
    /// Seed that reproduces the run
    pub seed: u64,
}

impl RunSummary {
    pub fn average_step_ms(&self) -> u64 {
        self.average_step_us / 1000
    }

    pub fn max_step_ms(&self) -> u64 {
        self.max_step_us / 1000
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Av: {}ms\t{}us",
            self.average_step_ms(),
            self.average_step_us
        )?;
        writeln!(f, "Max: {}ms\t{}us", self.max_step_ms(), self.max_step_us)?;
        write!(f, "FCount: {}", self.max_active_tiles)
    }
}

#[inline]
fn duration_to_u64(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
