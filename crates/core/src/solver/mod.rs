//! Propagation stepper: advances the whole grid by one generation
//!
//! The core abstraction is the `Stepper` trait, with one implementation per
//! `UpdateMode`:
//!
//! - `DoubleBufferedStepper` (default): every tile of generation t+1 is computed
//!   from generation t only, so the result does not depend on sweep order.
//! - `InPlaceStepper`: tiles are updated in place in row-major order, so a tile
//!   ignited earlier in the sweep already burns, spreads and decays later in
//!   the same sweep, giving the directional spread of a single-buffer sweep.
//!
//! For every burning tile both backends draw one uniform value per in-bounds
//! neighbor (left, right, previous row, next row), ignite that neighbor when
//! the draw is below the spread probability, then decay the source tile.
//!
//! # Example
//!
//! ```rust,ignore
//! use tile_fire_core::solver::create_stepper;
//! use tile_fire_core::SimulationConfig;
//!
//! let mut stepper = create_stepper(&SimulationConfig::new(100));
//! let active = stepper.step(&mut grid, &mut rng);
//! ```

mod double_buffered;
mod in_place;
#[allow(clippy::module_name_repetitions)]
mod r#trait;

pub use double_buffered::DoubleBufferedStepper;
pub use in_place::InPlaceStepper;
pub use r#trait::Stepper;

use crate::config::{SimulationConfig, UpdateMode};
use tracing::info;

/// Spread and burn-down rates shared by both backends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadParams {
    /// Per-neighbor, per-generation ignition chance in [0, 1]
    pub spread_probability: f32,
    /// Intensity lost by a burning tile each generation
    pub decay_rate: f32,
}

impl SpreadParams {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            spread_probability: config.spread_probability,
            decay_rate: config.decay_rate,
        }
    }
}

/// Create the stepper selected by `config.update_mode`.
///
/// # Returns
///
/// A boxed `Stepper` trait object
pub fn create_stepper(config: &SimulationConfig) -> Box<dyn Stepper> {
    let params = SpreadParams::from_config(config);
    info!(
        "Using {:?} stepper (spread probability {}, decay rate {})",
        config.update_mode, params.spread_probability, params.decay_rate
    );

    match config.update_mode {
        UpdateMode::DoubleBuffered => Box::new(DoubleBufferedStepper::new(params)),
        UpdateMode::InPlace => Box::new(InPlaceStepper::new(params)),
    }
}
