//! Ribbon mesh buffers and the sink they are pushed to.
//!
//! - [`MeshBuffer`] - Vertex positions + triangle indices owned by an animator
//! - [`MeshSink`] - The external renderable mesh receiving buffer replacements
//! - [`CpuMeshSink`] - Headless sink with normal recomputation

mod buffer;
mod sink;

pub use buffer::{MeshBuffer, QUAD_INDICES, QUAD_VERTICES, QUAD_WINDING};
pub use sink::{CpuMeshSink, MeshSink, RibbonVertex, compute_normals};
