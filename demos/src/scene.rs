//! Frame handler that traces several shapes side by side.

use muraltrace_app::{AppContext, AppError, AppHandler};
use muraltrace_core::mesh::CpuMeshSink;
use muraltrace_core::{RibbonAnimator, Tick};

use crate::presets::ScenePreset;

/// One shape being traced into its own sink.
pub struct TracedShape {
    pub name: &'static str,
    pub animator: RibbonAnimator,
    pub sink: CpuMeshSink,
}

/// Drives an independent animator per preset until all of them finish.
pub struct ShapeScene {
    presets: Vec<ScenePreset>,
    shapes: Vec<TracedShape>,
}

impl ShapeScene {
    pub fn new(presets: Vec<ScenePreset>) -> Self {
        Self {
            presets,
            shapes: Vec::new(),
        }
    }

    /// Shapes built by `on_init`.
    pub fn shapes(&self) -> &[TracedShape] {
        &self.shapes
    }

    pub fn is_finished(&self) -> bool {
        self.shapes.iter().all(|s| s.animator.is_finished())
    }
}

impl AppHandler for ShapeScene {
    fn on_init(&mut self, _ctx: &mut AppContext) -> Result<(), AppError> {
        for preset in &self.presets {
            if self.shapes.iter().any(|s| s.name == preset.name()) {
                log::warn!("Shape '{}' selected more than once, ignoring repeat", preset.name());
                continue;
            }

            let anchors = preset.shape.anchors()?;
            let animator = RibbonAnimator::new(&anchors, preset.settings)?;
            log::info!(
                "Tracing {} ({} anchors, {} edges, {:?})",
                preset.name(),
                anchors.len(),
                animator.edge_count(),
                preset.settings
            );
            self.shapes.push(TracedShape {
                name: preset.name(),
                animator,
                sink: CpuMeshSink::new().with_label(preset.name()),
            });
        }

        if self.shapes.is_empty() {
            return Err(AppError::InvalidConfig("no shapes to trace".into()));
        }
        Ok(())
    }

    fn on_update(&mut self, ctx: &mut AppContext) -> Result<bool, AppError> {
        let dt = ctx.delta_time();
        for shape in &mut self.shapes {
            if shape.animator.is_finished() {
                continue;
            }
            if shape.animator.drive(&mut shape.sink, dt)? == Tick::Finished {
                log::info!(
                    "{} finished at {:.2}s: {} edges drawn, {} skipped",
                    shape.name,
                    ctx.elapsed_time(),
                    shape.animator.drawn_edges(),
                    shape.animator.skipped_edges()
                );
            }
        }
        Ok(!self.is_finished())
    }

    fn on_shutdown(&mut self, _ctx: &mut AppContext) {
        for shape in &self.shapes {
            log::info!(
                "{}: {} ticks, {} mesh pushes, {} vertices ({} bytes interleaved), {} indices",
                shape.name,
                shape.animator.ticks(),
                shape.sink.push_count(),
                shape.sink.positions().len(),
                shape.sink.vertex_bytes().len(),
                shape.sink.indices().len()
            );
        }
    }
}
