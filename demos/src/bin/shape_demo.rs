//! # Shape Demo
//!
//! Traces stock shapes as growing ribbon meshes without a window. Each shape
//! gets its own animator and CPU mesh sink; progress and final mesh sizes are
//! logged. Run with `RUST_LOG=debug` to follow individual edges.

use std::process::ExitCode;

use muraltrace_app::{App, AppArgs};
use muraltrace_demos::{DemoArgs, ShapeScene};

fn main() -> ExitCode {
    let args = DemoArgs::parse();
    let scene = ShapeScene::new(args.scenes());

    match App::run_headless(scene, args) {
        Ok(summary) => {
            log::info!(
                "Done: {} frames, {:.2}s simulated ({:?})",
                summary.frames,
                summary.elapsed_time,
                summary.reason
            );
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}
