//! Animator-owned ribbon geometry.

use crate::math::Vec3;

/// Vertices per ribbon quad.
pub const QUAD_VERTICES: usize = 4;

/// Indices per ribbon quad (two triangles).
pub const QUAD_INDICES: usize = 6;

/// Local triangle winding over the corners
/// `[start-left, start-right, current-left, current-right]`.
pub const QUAD_WINDING: [u32; QUAD_INDICES] = [0, 1, 2, 1, 3, 2];

/// Flat vertex and triangle-index lists pushed to a [`MeshSink`](super::MeshSink).
///
/// Only whole quads are ever added, so the vertex count stays a multiple of
/// [`QUAD_VERTICES`] and the index count a multiple of [`QUAD_INDICES`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
}

impl MeshBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one quad, offsetting its winding by the current vertex count.
    pub fn push_quad(&mut self, corners: [Vec3; QUAD_VERTICES]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&corners);
        self.indices.extend(QUAD_WINDING.iter().map(|i| base + i));
    }

    /// Replace the whole buffer with a single quad.
    pub fn replace_with_quad(&mut self, corners: [Vec3; QUAD_VERTICES]) {
        self.clear();
        self.push_quad(corners);
    }

    /// Remove all geometry, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Vertex positions.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Triangle indices into [`vertices`](Self::vertices).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of quads held.
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / QUAD_VERTICES
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check the quad-multiple counts and that every index is in range.
    pub fn is_consistent(&self) -> bool {
        let count = self.vertices.len() as u32;
        self.vertices.len() % QUAD_VERTICES == 0
            && self.indices.len() % QUAD_INDICES == 0
            && self.indices.iter().all(|&i| i < count)
    }
}
