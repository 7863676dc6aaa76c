//! # MuralTrace App
//!
//! Headless, frame-driven application framework for running ribbon animations.
//!
//! There is no window: the [`App`] owns a frame loop that advances time by a
//! fixed step (or by measured wall-clock time in realtime mode) and hands each
//! frame to a custom handler.
//!
//! ## Overview
//!
//! - [`AppHandler`] - Trait for per-frame application logic
//! - [`AppArgs`] - Trait for parsing command line arguments
//! - [`App`] - Frame loop that drives the handler until it finishes
//! - [`CancellationToken`] - Shared flag that stops the loop from outside
//!
//! ## Example
//!
//! ```ignore
//! use muraltrace_app::{App, AppArgs, AppContext, AppError, AppHandler, DefaultAppArgs};
//!
//! struct MyApp;
//!
//! impl AppHandler for MyApp {
//!     fn on_update(&mut self, ctx: &mut AppContext) -> Result<bool, AppError> {
//!         Ok(ctx.frame_number() < 10)
//!     }
//! }
//!
//! fn main() {
//!     let args = DefaultAppArgs::parse();
//!     App::run_headless(MyApp, args).ok();
//! }
//! ```

mod app;
mod args;
mod cancellation;
mod context;
mod error;
mod handler;

pub use app::{App, RunSummary, StopReason};
pub use args::{AppArgs, DefaultAppArgs, FrameArgs};
pub use cancellation::CancellationToken;
pub use context::AppContext;
pub use error::AppError;
pub use handler::AppHandler;

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
///
/// This should be called before using any app functionality.
pub fn init() {
    log::info!("MuralTrace App v{} initialized", VERSION);
}
