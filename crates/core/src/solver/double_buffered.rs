//! Order-independent stepper using a ping-pong tile buffer.

use super::{SpreadParams, Stepper};
use crate::config::UpdateMode;
use crate::grid::{neighbors_of, Tile, TileGrid};
use crate::SimRng;

/// Computes generation t+1 into a back buffer from generation t, then swaps.
///
/// Every read sees generation t, so a tile ignited this generation neither
/// spreads nor decays until the next one, and sweep order has no effect
/// beyond the order of random draws.
///
/// Only unburnt neighbors can be lit. A successful roll against a tile that is
/// already burning leaves it alone, so every tile burns for its full
/// `intensity / decay_rate` generations. The in-place sweep puts such a tile
/// out instead.
#[derive(Debug, Clone)]
pub struct DoubleBufferedStepper {
    params: SpreadParams,
    // Reused across steps; holds the previous generation after each swap
    back: Vec<Tile>,
}

impl DoubleBufferedStepper {
    #[must_use]
    pub fn new(params: SpreadParams) -> Self {
        Self {
            params,
            back: Vec::new(),
        }
    }

    pub fn params(&self) -> SpreadParams {
        self.params
    }
}

impl Stepper for DoubleBufferedStepper {
    fn step(&mut self, grid: &mut TileGrid, rng: &mut SimRng) -> usize {
        let tile_count = grid.tile_count();
        let SpreadParams {
            spread_probability,
            decay_rate,
        } = self.params;

        self.back.clear();
        self.back.extend_from_slice(grid.tiles());

        let current = grid.tiles();
        let mut active = 0;

        for row in 0..tile_count {
            for col in 0..tile_count {
                let idx = row * tile_count + col;
                let tile = current[idx];
                if !tile.is_burning() {
                    continue;
                }
                active += 1;

                for (n_row, n_col) in neighbors_of(tile_count, row, col) {
                    let n_idx = n_row * tile_count + n_col;
                    // Draw first so every neighbor consumes one value
                    if rng.next_unit() < spread_probability && current[n_idx].is_ignitable() {
                        self.back[n_idx] = current[n_idx].ignite();
                    }
                }

                self.back[idx] = tile.decay(decay_rate);
            }
        }

        grid.swap_tiles(&mut self.back);
        active
    }

    fn mode(&self) -> UpdateMode {
        UpdateMode::DoubleBuffered
    }
}
