//! The mesh sink seam and a CPU-side implementation.

use crate::error::SinkError;
use crate::math::Vec3;

/// A renderable triangle mesh that accepts whole-buffer replacements.
///
/// Owned by the host scene, not by the animator. Implementations recompute
/// vertex normals from the new triangle winding on every call.
pub trait MeshSink {
    /// Replace the mesh contents.
    fn replace(&mut self, vertices: &[Vec3], indices: &[u32]) -> Result<(), SinkError>;
}

/// Interleaved vertex (position + normal), 24 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RibbonVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Per-vertex normals as the normalized sum of area-weighted face normals.
///
/// Vertices referenced only by zero-area triangles get a zero normal.
/// Indices out of range are ignored.
pub fn compute_normals(vertices: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::zeros(); vertices.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= vertices.len() || b >= vertices.len() || c >= vertices.len() {
            continue;
        }
        let face = (vertices[b] - vertices[a]).cross(&(vertices[c] - vertices[a]));
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for n in &mut normals {
        *n = n.try_normalize(0.0).unwrap_or_else(Vec3::zeros);
    }
    normals
}

/// CPU-side sink keeping the latest mesh with recomputed normals.
///
/// Used headless by tests and demos; a renderer can upload
/// [`vertex_bytes`](Self::vertex_bytes) and [`indices`](Self::indices)
/// directly.
#[derive(Debug, Clone, Default)]
pub struct CpuMeshSink {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
    push_count: u64,
    destroyed: bool,
    label: Option<String>,
}

impl CpuMeshSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Simulate the host mesh object going away. Further pushes fail.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.positions.clear();
        self.normals.clear();
        self.indices.clear();
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Latest vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Normals recomputed on the last push.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Latest triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of successful pushes so far.
    pub fn push_count(&self) -> u64 {
        self.push_count
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Interleaved position + normal vertices.
    pub fn interleaved(&self) -> Vec<RibbonVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| RibbonVertex {
                position: [p.x, p.y, p.z],
                normal: [n.x, n.y, n.z],
            })
            .collect()
    }

    /// Raw bytes of [`interleaved`](Self::interleaved), ready for upload.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.interleaved()).to_vec()
    }
}

impl MeshSink for CpuMeshSink {
    fn replace(&mut self, vertices: &[Vec3], indices: &[u32]) -> Result<(), SinkError> {
        if self.destroyed {
            return Err(SinkError::Destroyed);
        }
        self.positions.clear();
        self.positions.extend_from_slice(vertices);
        self.indices.clear();
        self.indices.extend_from_slice(indices);
        self.normals = compute_normals(&self.positions, &self.indices);
        self.push_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point2;
    use crate::mesh::QUAD_WINDING;

    fn unit_quad() -> Vec<Vec3> {
        vec![
            point2(0.0, 0.0),
            point2(0.0, 1.0),
            point2(1.0, 0.0),
            point2(1.0, 1.0),
        ]
    }

    #[test]
    fn test_quad_normals_face_out_of_plane() {
        let normals = compute_normals(&unit_quad(), &QUAD_WINDING);
        for n in normals {
            assert!((n - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
        }
    }

    #[test]
    fn test_zero_area_quad_has_zero_normals() {
        let collapsed = vec![point2(1.0, 0.0); 4];
        let normals = compute_normals(&collapsed, &QUAD_WINDING);
        assert!(normals.iter().all(|n| *n == Vec3::zeros()));
    }

    #[test]
    fn test_sink_replace() {
        let mut sink = CpuMeshSink::new().with_label("quad");
        sink.replace(&unit_quad(), &QUAD_WINDING).unwrap();

        assert_eq!(sink.positions().len(), 4);
        assert_eq!(sink.normals().len(), 4);
        assert_eq!(sink.indices(), &QUAD_WINDING);
        assert_eq!(sink.push_count(), 1);
        assert_eq!(sink.label(), Some("quad"));

        sink.replace(&[], &[]).unwrap();
        assert!(sink.positions().is_empty());
        assert_eq!(sink.push_count(), 2);
    }

    #[test]
    fn test_vertex_bytes_size() {
        let mut sink = CpuMeshSink::new();
        sink.replace(&unit_quad(), &QUAD_WINDING).unwrap();
        // 4 vertices * 24 bytes
        assert_eq!(sink.vertex_bytes().len(), 4 * 24);
    }

    #[test]
    fn test_destroyed_sink_rejects_pushes() {
        let mut sink = CpuMeshSink::new();
        sink.destroy();
        assert_eq!(
            sink.replace(&unit_quad(), &QUAD_WINDING),
            Err(SinkError::Destroyed)
        );
        assert_eq!(sink.push_count(), 0);
    }
}
