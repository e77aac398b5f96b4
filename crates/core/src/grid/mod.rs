//! Grid store: tile state and the square grid holding it

mod tile;
mod tile_grid;

pub use tile::{Tile, BURNOUT_EPSILON};
pub use tile_grid::TileGrid;

pub(crate) use tile_grid::neighbors_of;
