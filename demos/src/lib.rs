//! # MuralTrace Demos
//!
//! Shape scenes showcasing MuralTrace ribbon animation.
//!
//! ## Available Demos
//!
//! - `shape_demo` - Trace any set of stock shapes headlessly and log the
//!   resulting meshes

pub mod args;
pub mod presets;
pub mod scene;

pub use args::DemoArgs;
pub use presets::{SceneOverrides, ScenePreset};
pub use scene::{ShapeScene, TracedShape};

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
