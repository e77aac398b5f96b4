//! Stepper trait definition
//!
//! Both update strategies implement `Stepper`, so the run controller can drive
//! either one without knowing which is in use.

use crate::config::UpdateMode;
use crate::grid::TileGrid;
use crate::SimRng;

/// Advances a `TileGrid` one generation at a time.
pub trait Stepper: Send {
    /// Advance `grid` by one generation.
    ///
    /// # Returns
    ///
    /// Number of burning tiles the sweep visited. The double-buffered stepper
    /// counts exactly the tiles burning when the step began; the in-place
    /// sweep also counts tiles lit earlier in the same sweep and skips tiles
    /// put out before their turn. Either way zero means the fire was already
    /// out and the step changed nothing.
    fn step(&mut self, grid: &mut TileGrid, rng: &mut SimRng) -> usize;

    /// Update strategy implemented by this stepper.
    fn mode(&self) -> UpdateMode;
}
