//! Command line arguments trait and default implementation.
//!
//! Uses clap for CLI parsing with:
//! - Help text (`--help`)
//! - Validation and clear error messages
//! - Warnings for flag combinations that have no effect

use crate::error::AppError;

/// Default fixed frame step: 60 frames per simulated second.
pub const DEFAULT_FIXED_DELTA: f32 = 1.0 / 60.0;

/// Trait for parsing command line arguments.
///
/// Implement this trait to customize how your application handles
/// command line arguments. The trait provides defaults for all methods,
/// making it easy to override only the options you need.
///
/// # Example
///
/// ```ignore
/// use muraltrace_app::AppArgs;
///
/// struct MyArgs {
///     slow: bool,
/// }
///
/// impl AppArgs for MyArgs {
///     fn parse() -> Self {
///         Self {
///             slow: std::env::args().any(|a| a == "--slow"),
///         }
///     }
///
///     fn fixed_delta(&self) -> f32 {
///         if self.slow { 1.0 / 10.0 } else { 1.0 / 60.0 }
///     }
/// }
/// ```
pub trait AppArgs: Sized {
    /// Parse command line arguments.
    fn parse() -> Self;

    /// Get the frame step in seconds.
    ///
    /// In realtime mode this is the pacing target instead.
    ///
    /// Default: 1/60
    fn fixed_delta(&self) -> f32 {
        DEFAULT_FIXED_DELTA
    }

    /// Get whether frame deltas are measured from the wall clock.
    ///
    /// Default: false (deterministic fixed steps)
    fn realtime(&self) -> bool {
        false
    }

    /// Get the maximum number of frames to process before auto-exit.
    ///
    /// This is useful for automated testing to bound a run.
    ///
    /// Default: `None` (run until the handler finishes)
    fn max_frames(&self) -> Option<u64> {
        None
    }
}

/// Frame loop options shared by every binary.
///
/// Flatten this into a binary's own clap parser to get the standard flags.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FrameArgs {
    /// Frame step in seconds (default 1/60).
    /// With --realtime this is the pacing target.
    #[arg(long)]
    pub dt: Option<f32>,

    /// Exit after N frames (useful for testing).
    #[arg(long)]
    pub max_frames: Option<u64>,

    /// Measure frame deltas from the wall clock instead of fixed steps.
    #[arg(long)]
    pub realtime: bool,
}

// ============================================================================
// Default App Args
// ============================================================================

/// Default command line arguments implementation.
///
/// # Examples
///
/// ```bash
/// # Show help
/// ./my_app --help
///
/// # Step at 30 frames per second
/// ./my_app --dt 0.0333
///
/// # Run for 100 frames then exit (useful for testing)
/// ./my_app --max-frames 100
/// ```
#[derive(Debug, Clone)]
pub struct DefaultAppArgs {
    fixed_delta: f32,
    realtime: bool,
    max_frames: Option<u64>,
}

impl Default for DefaultAppArgs {
    fn default() -> Self {
        Self {
            fixed_delta: DEFAULT_FIXED_DELTA,
            realtime: false,
            max_frames: None,
        }
    }
}

impl DefaultAppArgs {
    /// Set the frame step.
    pub fn with_fixed_delta(mut self, fixed_delta: f32) -> Self {
        self.fixed_delta = fixed_delta;
        self
    }

    /// Set wall-clock mode.
    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// Set the maximum number of frames.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }
}

impl From<FrameArgs> for DefaultAppArgs {
    fn from(args: FrameArgs) -> Self {
        if args.max_frames == Some(0) {
            log::warn!("--max-frames 0 stops the run before the first frame");
        }

        Self {
            fixed_delta: args.dt.unwrap_or(DEFAULT_FIXED_DELTA),
            realtime: args.realtime,
            max_frames: args.max_frames,
        }
    }
}

mod native {
    use super::FrameArgs;
    use clap::Parser;

    /// MuralTrace application arguments.
    #[derive(Parser, Debug)]
    #[command(
        name = "MuralTrace App",
        about = "Headless MuralTrace application",
        version
    )]
    pub(super) struct ClapArgs {
        #[command(flatten)]
        pub frame: FrameArgs,
    }
}

impl AppArgs for DefaultAppArgs {
    fn parse() -> Self {
        use clap::Parser;
        native::ClapArgs::parse().frame.into()
    }

    fn fixed_delta(&self) -> f32 {
        self.fixed_delta
    }

    fn realtime(&self) -> bool {
        self.realtime
    }

    fn max_frames(&self) -> Option<u64> {
        self.max_frames
    }
}

/// Reject a frame step the loop cannot use.
pub(crate) fn validate_fixed_delta(fixed_delta: f32) -> Result<(), AppError> {
    if fixed_delta.is_finite() && fixed_delta > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidConfig(format!(
            "frame step must be positive and finite, got {fixed_delta}"
        )))
    }
}
