//! Run-time simulation configuration
//!
//! The spread probability and decay rate were fixed constants in the first
//! versions of the simulator. They are now ordinary configuration values with
//! those constants as defaults, and can be loaded from a JSON file.

use crate::SimError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default grid side length.
pub const DEFAULT_TILE_COUNT: usize = 1000;

/// Default per-neighbor, per-generation chance of ignition (1/5).
pub const DEFAULT_SPREAD_PROBABILITY: f32 = 0.2;

/// Default intensity lost by a burning tile each generation.
/// At intensity 1.0 a tile burns for exactly 200 generations.
pub const DEFAULT_DECAY_RATE: f32 = 0.005;

/// Lower bound of the initial fuel draw.
pub const DEFAULT_FUEL_MIN: f32 = 0.5;

/// Upper bound of the initial fuel draw.
pub const DEFAULT_FUEL_MAX: f32 = 1.0;

/// Generations between telemetry report lines.
pub const DEFAULT_REPORT_INTERVAL: u32 = 60;

/// How a generation is computed from the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateMode {
    /// Read generation t, write generation t+1 into a back buffer, swap.
    /// Result does not depend on iteration order.
    #[default]
    DoubleBuffered,
    /// Mutate tiles in place in row-major order. Tiles ignited earlier in
    /// the sweep burn, spread and decay later in the same sweep.
    InPlace,
}

/// Configuration for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid side length; the grid holds `tile_count²` tiles
    pub tile_count: usize,
    /// Chance in [0, 1] that a burning tile ignites a given neighbor each generation
    pub spread_probability: f32,
    /// Intensity lost per generation, in (0, 1]
    pub decay_rate: f32,
    /// Lower bound of the uniform fuel draw
    pub fuel_min: f32,
    /// Upper bound of the uniform fuel draw
    pub fuel_max: f32,
    /// RNG seed. `None` draws a fresh seed, which is reported in the run summary.
    pub seed: Option<u64>,
    /// Generation update strategy
    pub update_mode: UpdateMode,
    /// Generations between report lines (0 disables periodic reports)
    pub report_interval: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tile_count: DEFAULT_TILE_COUNT,
            spread_probability: DEFAULT_SPREAD_PROBABILITY,
            decay_rate: DEFAULT_DECAY_RATE,
            fuel_min: DEFAULT_FUEL_MIN,
            fuel_max: DEFAULT_FUEL_MAX,
            seed: None,
            update_mode: UpdateMode::default(),
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

impl SimulationConfig {
    /// Default configuration with the given grid side length.
    pub fn new(tile_count: usize) -> Self {
        Self {
            tile_count,
            ..Self::default()
        }
    }

    pub fn with_spread_probability(mut self, probability: f32) -> Self {
        self.spread_probability = probability;
        self
    }

    pub fn with_decay_rate(mut self, rate: f32) -> Self {
        self.decay_rate = rate;
        self
    }

    pub fn with_fuel_range(mut self, min: f32, max: f32) -> Self {
        self.fuel_min = min;
        self.fuel_max = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_update_mode(mut self, mode: UpdateMode) -> Self {
        self.update_mode = mode;
        self
    }

    pub fn with_report_interval(mut self, interval: u32) -> Self {
        self.report_interval = interval;
        self
    }

    /// Total number of tiles, or `None` if `tile_count²` overflows.
    pub fn total_tiles(&self) -> Option<usize> {
        self.tile_count.checked_mul(self.tile_count)
    }

    /// Check every value against its valid range.
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.tile_count == 0 {
            return Err(SimError::InvalidTileCount {
                tile_count: self.tile_count,
            });
        }
        if self.total_tiles().is_none() {
            return Err(SimError::GridTooLarge {
                tile_count: self.tile_count,
            });
        }
        if !(0.0..=1.0).contains(&self.spread_probability) {
            return Err(SimError::invalid_parameter(
                "spread_probability",
                format!("{} is outside [0, 1]", self.spread_probability),
            ));
        }
        if self.decay_rate.is_nan() || self.decay_rate <= 0.0 || self.decay_rate > 1.0 {
            return Err(SimError::invalid_parameter(
                "decay_rate",
                format!("{} is outside (0, 1]", self.decay_rate),
            ));
        }
        if !(0.0..=1.0).contains(&self.fuel_min) || !(0.0..=1.0).contains(&self.fuel_max) {
            return Err(SimError::invalid_parameter(
                "fuel_range",
                format!(
                    "[{}, {}] must lie within [0, 1]",
                    self.fuel_min, self.fuel_max
                ),
            ));
        }
        if self.fuel_min > self.fuel_max {
            return Err(SimError::invalid_parameter(
                "fuel_range",
                format!("min {} exceeds max {}", self.fuel_min, self.fuel_max),
            ));
        }
        Ok(())
    }

    /// Load configuration from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or fails validation.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| SimError::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Self = serde_json::from_str(&contents).map_err(|e| SimError::ConfigParse {
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns error if the configuration cannot be serialized or written.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self).map_err(|e| SimError::ConfigParse {
            reason: e.to_string(),
        })?;

        fs::write(path, contents).map_err(|e| SimError::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
