//! Ignition seeding
//!
//! A run starts from a single burning tile. Seeding is a plain overwrite:
//! seeding the same tile twice simply re-ignites it at full intensity.

use crate::grid::{Tile, TileGrid};
use tracing::debug;

/// Intensity given to a seeded tile.
pub const SEED_INTENSITY: f32 = 1.0;

/// Ignite the tile at `(tile_count / 2, tile_count / 2)`.
///
/// Returns the seeded coordinates.
pub fn ignite_center(grid: &mut TileGrid) -> (usize, usize) {
    let center = grid.tile_count() / 2;
    ignite_at(grid, center, center);
    (center, center)
}

/// Set the tile at `(row, col)` burning at full intensity with an empty fuel store.
///
/// # Panics
/// Panics if coordinates are out of bounds
pub fn ignite_at(grid: &mut TileGrid, row: usize, col: usize) {
    *grid.tile_mut(row, col) = Tile::Burning {
        intensity: SEED_INTENSITY,
    };
    debug!("Seeded ignition at ({}, {})", row, col);
}
