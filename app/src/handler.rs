//! Application handler trait.

use crate::context::AppContext;
use crate::error::AppError;

/// Trait for handling application frames.
///
/// Implement this trait to create custom application logic.
///
/// # Lifecycle
///
/// 1. `on_init` - Called once before the first frame
/// 2. `on_update` - Called every frame with the frame's delta time
/// 3. `on_shutdown` - Called once when the loop stops, for any reason
///
/// # Example
///
/// ```ignore
/// use muraltrace_app::{AppContext, AppError, AppHandler};
///
/// struct MyApp {
///     frame_count: u64,
/// }
///
/// impl AppHandler for MyApp {
///     fn on_init(&mut self, _ctx: &mut AppContext) -> Result<(), AppError> {
///         log::info!("Application initialized");
///         Ok(())
///     }
///
///     fn on_update(&mut self, _ctx: &mut AppContext) -> Result<bool, AppError> {
///         self.frame_count += 1;
///         Ok(self.frame_count < 100)
///     }
/// }
/// ```
pub trait AppHandler {
    /// Called once when the application initializes.
    ///
    /// Use this to build animators and sinks. An error aborts the run
    /// before any frame is processed.
    fn on_init(&mut self, _ctx: &mut AppContext) -> Result<(), AppError> {
        Ok(())
    }

    /// Called every frame.
    ///
    /// Returns `Ok(true)` to continue running, `Ok(false)` when there is
    /// nothing left to do.
    fn on_update(&mut self, ctx: &mut AppContext) -> Result<bool, AppError>;

    /// Called when the application is closing.
    ///
    /// Use this to log results and clean up resources.
    fn on_shutdown(&mut self, _ctx: &mut AppContext) {}
}
