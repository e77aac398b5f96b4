//! Export of grid state to a rendering collaborator
//!
//! The simulation keeps one state per tile. A renderer reads a `GridSnapshot`
//! between steps and, if it draws with non-indexed triangles, derives a
//! `VertexBuffer` holding six colored vertices per tile.

mod snapshot;
mod vertex_buffer;

pub use snapshot::{GridSnapshot, TileView};
pub use vertex_buffer::{Vertex, VertexBuffer, VERTICES_PER_TILE};
