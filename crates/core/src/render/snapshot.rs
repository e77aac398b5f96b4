//! Read-only view of the grid between generations.

use crate::grid::{Tile, TileGrid};

/// One tile as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileView {
    pub row: usize,
    pub col: usize,
    /// Burning intensity (0 when not burning)
    pub intensity: f32,
    /// Fuel still available to an ignition
    pub fuel_buffer: f32,
}

/// Settled state of the grid after a whole number of generations.
///
/// Borrowing the grid immutably guarantees no step runs while the snapshot
/// is alive.
#[derive(Debug, Clone, Copy)]
pub struct GridSnapshot<'a> {
    grid: &'a TileGrid,
    generation: u64,
}

impl<'a> GridSnapshot<'a> {
    pub fn new(grid: &'a TileGrid, generation: u64) -> Self {
        Self { grid, generation }
    }

    /// Generations completed when the snapshot was taken.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tile_count(&self) -> usize {
        self.grid.tile_count()
    }

    /// Raw tile states in row-major order.
    pub fn tiles(&self) -> &'a [Tile] {
        self.grid.tiles()
    }

    /// Tiles with their logical coordinates, row-major.
    pub fn views(&self) -> impl Iterator<Item = TileView> + 'a {
        let tile_count = self.grid.tile_count();
        self.grid
            .tiles()
            .iter()
            .enumerate()
            .map(move |(idx, tile)| TileView {
                row: idx / tile_count,
                col: idx % tile_count,
                intensity: tile.intensity(),
                fuel_buffer: tile.fuel_buffer(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_carry_coordinates() {
        let grid = TileGrid::from_tiles(
            2,
            vec![
                Tile::Unburnt { fuel: 0.6 },
                Tile::Burning { intensity: 0.9 },
                Tile::Exhausted,
                Tile::Unburnt { fuel: 0.7 },
            ],
        )
        .unwrap();
        let snapshot = GridSnapshot::new(&grid, 3);
        let views: Vec<_> = snapshot.views().collect();

        assert_eq!(snapshot.generation(), 3);
        assert_eq!(views.len(), 4);
        assert_eq!(
            views[1],
            TileView {
                row: 0,
                col: 1,
                intensity: 0.9,
                fuel_buffer: 0.0
            }
        );
        assert_eq!((views[2].row, views[2].col), (1, 0));
        assert_eq!(views[3].fuel_buffer, 0.7);
    }
}
