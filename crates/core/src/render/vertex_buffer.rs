//! Per-vertex color buffer for non-indexed triangle rendering
//!
//! Each tile becomes a quad of two triangles in normalized device coordinates,
//! laid out row by row from (-1, -1). Colors encode tile state:
//! - red: burning intensity
//! - green: remaining fuel
//! - blue: unused
//!
//! Positions are fixed at construction; `refresh` only rewrites colors.

use super::GridSnapshot;
use crate::SimError;
use bytemuck::{Pod, Zeroable};
use rayon::prelude::*;

/// Vertices per tile (two triangles).
pub const VERTICES_PER_TILE: usize = 6;

/// One vertex as uploaded to the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// Position in normalized device coordinates
    pub pos: [f32; 2],
    /// RGB color
    pub col: [f32; 3],
}

/// Vertex buffer covering a whole grid.
#[derive(Debug, Clone)]
pub struct VertexBuffer {
    vertices: Vec<Vertex>,
    tile_count: usize,
}

impl VertexBuffer {
    /// Lay out quads for a `tile_count × tile_count` grid with black colors.
    ///
    /// # Errors
    /// Returns error if the tile count is 0, the vertex count overflows, or
    /// the buffer cannot be allocated.
    pub fn new(tile_count: usize) -> Result<Self, SimError> {
        if tile_count == 0 {
            return Err(SimError::InvalidTileCount { tile_count });
        }
        let total_tiles = tile_count
            .checked_mul(tile_count)
            .ok_or(SimError::GridTooLarge { tile_count })?;
        let vertex_count = total_tiles
            .checked_mul(VERTICES_PER_TILE)
            .ok_or(SimError::GridTooLarge { tile_count })?;

        let mut vertices = Vec::new();
        vertices
            .try_reserve_exact(vertex_count)
            .map_err(|e| SimError::AllocationFailed {
                tiles: total_tiles,
                reason: e.to_string(),
            })?;
        vertices.resize(vertex_count, Vertex::zeroed());

        let increment = 2.0 / tile_count as f32;
        vertices
            .par_chunks_mut(VERTICES_PER_TILE)
            .enumerate()
            .for_each(|(idx, quad)| {
                let base_x = (idx % tile_count) as f32 * increment - 1.0;
                let base_y = (idx / tile_count) as f32 * increment - 1.0;
                let corners = [
                    [base_x, base_y],
                    [base_x + increment, base_y],
                    [base_x, base_y + increment],
                    [base_x + increment, base_y + increment],
                    [base_x + increment, base_y],
                    [base_x, base_y + increment],
                ];
                for (vertex, pos) in quad.iter_mut().zip(corners) {
                    vertex.pos = pos;
                }
            });

        Ok(Self {
            vertices,
            tile_count,
        })
    }

    /// Build and color a buffer for `snapshot`.
    ///
    /// # Errors
    /// Same as [`VertexBuffer::new`].
    pub fn from_snapshot(snapshot: &GridSnapshot<'_>) -> Result<Self, SimError> {
        let mut buffer = Self::new(snapshot.tile_count())?;
        buffer.refresh(snapshot);
        Ok(buffer)
    }

    /// Recolor every vertex from the snapshot.
    ///
    /// # Panics
    /// Panics if the snapshot grid size differs from the buffer's.
    pub fn refresh(&mut self, snapshot: &GridSnapshot<'_>) {
        assert_eq!(
            snapshot.tile_count(),
            self.tile_count,
            "Snapshot grid size does not match vertex buffer"
        );
        self.vertices
            .par_chunks_mut(VERTICES_PER_TILE)
            .zip(snapshot.tiles().par_iter())
            .for_each(|(quad, tile)| {
                let col = [tile.intensity(), tile.fuel_buffer(), 0.0];
                for vertex in quad {
                    vertex.col = col;
                }
            });
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes ready for a GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Vertex count for a draw call.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
