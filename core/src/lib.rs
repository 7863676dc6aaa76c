//! # MuralTrace Core
//!
//! Shape outline generation and progressive "line being drawn" ribbon
//! animation, independent of any rendering engine.
//!
//! - [`shape`] - Vertex generators producing [`AnchorSequence`]s
//! - [`ribbon`] - The [`RibbonAnimator`] growing one quad per edge per tick
//! - [`mesh`] - The animator-owned [`MeshBuffer`] and the [`MeshSink`] seam

pub mod error;
pub mod math;
pub mod mesh;
pub mod ribbon;
pub mod shape;

pub use error::{RibbonError, RibbonResult, SinkError};
pub use mesh::{CpuMeshSink, MeshBuffer, MeshSink};
pub use ribbon::{PostCompletion, Retention, RibbonAnimator, RibbonSettings, Stepping, Tick};
pub use shape::{AnchorSequence, Group, Shape, Traversal};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core version. Called once by the app framework at startup.
pub fn init() {
    log::info!("MuralTrace Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
