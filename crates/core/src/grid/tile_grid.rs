//! Square tile grid owning the fire state of every tile.

use super::Tile;
use crate::{SimError, SimRng};
use rayon::prelude::*;

/// `tile_count × tile_count` tiles in row-major order.
///
/// Size is fixed at construction. Neighborhood is von Neumann (left, right,
/// up, down) and simply absent past the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    tile_count: usize,
}

impl TileGrid {
    /// Create a grid with every tile unburnt and holding fuel drawn uniformly
    /// from `[fuel_min, fuel_max]`.
    ///
    /// # Errors
    /// - `InvalidTileCount` if `tile_count` is 0
    /// - `GridTooLarge` if `tile_count²` overflows
    /// - `InvalidParameter` if the fuel range is empty
    /// - `AllocationFailed` if the tile array cannot be allocated
    pub fn new(
        tile_count: usize,
        fuel_min: f32,
        fuel_max: f32,
        rng: &mut SimRng,
    ) -> Result<Self, SimError> {
        if tile_count == 0 {
            return Err(SimError::InvalidTileCount { tile_count });
        }
        let total = tile_count
            .checked_mul(tile_count)
            .ok_or(SimError::GridTooLarge { tile_count })?;
        if fuel_min.is_nan() || fuel_max.is_nan() || fuel_min > fuel_max {
            return Err(SimError::invalid_parameter(
                "fuel_range",
                format!("min {fuel_min} exceeds max {fuel_max}"),
            ));
        }

        let mut tiles = Vec::new();
        tiles
            .try_reserve_exact(total)
            .map_err(|e| SimError::AllocationFailed {
                tiles: total,
                reason: e.to_string(),
            })?;
        tiles.extend((0..total).map(|_| Tile::Unburnt {
            fuel: rng.uniform_inclusive(fuel_min, fuel_max),
        }));

        Ok(Self { tiles, tile_count })
    }

    /// Build a grid from explicit tile states in row-major order.
    ///
    /// # Errors
    /// - `InvalidTileCount` if `tile_count` is 0
    /// - `GridTooLarge` if `tile_count²` overflows
    /// - `InvalidParameter` if `tiles.len()` is not `tile_count²`
    pub fn from_tiles(tile_count: usize, tiles: Vec<Tile>) -> Result<Self, SimError> {
        if tile_count == 0 {
            return Err(SimError::InvalidTileCount { tile_count });
        }
        let total = tile_count
            .checked_mul(tile_count)
            .ok_or(SimError::GridTooLarge { tile_count })?;
        if tiles.len() != total {
            return Err(SimError::invalid_parameter(
                "tiles",
                format!(
                    "{} tiles do not fill a {tile_count}x{tile_count} grid",
                    tiles.len()
                ),
            ));
        }
        Ok(Self { tiles, tile_count })
    }

    /// Grid side length.
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    #[inline]
    pub fn total_tiles(&self) -> usize {
        self.tiles.len()
    }

    /// Row-major index of `(row, col)`.
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.tile_count && col < self.tile_count,
            "Tile coordinates out of bounds"
        );
        row * self.tile_count + col
    }

    /// Tile at `(row, col)`.
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> &Tile {
        &self.tiles[self.index_of(row, col)]
    }

    /// Mutable tile at `(row, col)`.
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn tile_mut(&mut self, row: usize, col: usize) -> &mut Tile {
        let idx = self.index_of(row, col);
        &mut self.tiles[idx]
    }

    /// All tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Exchange the tile storage with a back buffer of the same length.
    pub(crate) fn swap_tiles(&mut self, back: &mut Vec<Tile>) {
        debug_assert_eq!(back.len(), self.tiles.len());
        std::mem::swap(&mut self.tiles, back);
    }

    /// In-bounds von Neumann neighbors of `(row, col)` in the order
    /// left, right, previous row, next row.
    #[inline]
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        neighbors_of(self.tile_count, row, col)
    }

    /// Number of tiles currently burning.
    pub fn burning_count(&self) -> usize {
        self.tiles.par_iter().filter(|tile| tile.is_burning()).count()
    }
}

/// In-bounds von Neumann neighbors of `(row, col)` on a `tile_count` grid.
#[inline]
pub(crate) fn neighbors_of(
    tile_count: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let last = tile_count - 1;
    [
        (col > 0).then(|| (row, col - 1)),
        (col < last).then(|| (row, col + 1)),
        (row > 0).then(|| (row - 1, col)),
        (row < last).then(|| (row + 1, col)),
    ]
    .into_iter()
    .flatten()
}
