//! Main application struct and frame loop.

use std::time::{Duration, Instant};

use crate::args::{AppArgs, validate_fixed_delta};
use crate::cancellation::CancellationToken;
use crate::context::AppContext;
use crate::error::AppError;
use crate::handler::AppHandler;

/// Why the frame loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The handler reported it has nothing left to do.
    Finished,
    /// The `max_frames` limit was reached.
    MaxFrames,
    /// The cancellation token was signalled.
    Cancelled,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Number of frames handed to the handler.
    pub frames: u64,
    /// Simulated seconds covered by those frames.
    pub elapsed_time: f32,
    pub reason: StopReason,
}

/// Headless application that drives a handler frame by frame.
///
/// The `App` struct is generic over:
/// - `H`: The handler type that implements [`AppHandler`]
/// - `A`: The arguments type that implements [`AppArgs`]
///
/// # Example
///
/// ```ignore
/// use muraltrace_app::{App, AppArgs, DefaultAppArgs};
///
/// fn main() {
///     let args = DefaultAppArgs::parse();
///     if App::run_headless(MyApp::default(), args).is_err() {
///         std::process::exit(1);
///     }
/// }
/// ```
pub struct App<H, A>
where
    H: AppHandler,
    A: AppArgs,
{
    handler: H,
    args: A,
    cancellation: CancellationToken,
}

impl<H, A> App<H, A>
where
    H: AppHandler,
    A: AppArgs,
{
    /// Create a new application.
    pub fn new(handler: H, args: A) -> Self {
        Self {
            handler,
            args,
            cancellation: CancellationToken::new(),
        }
    }

    /// Share an externally owned cancellation token with the loop.
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Get a handle to the loop's cancellation token.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Initialize logging and run the application to completion.
    ///
    /// This is the main entry point for binaries. Errors are logged before
    /// being returned.
    ///
    /// # Panics
    ///
    /// Panics if a global logger has already been installed.
    pub fn run_headless(handler: H, args: A) -> Result<RunSummary, AppError> {
        // Initialize logging
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        muraltrace_core::init();
        crate::init();

        let mut app = Self::new(handler, args);
        app.run()
    }

    /// Run the frame loop without touching global logger state.
    pub fn run(&mut self) -> Result<RunSummary, AppError> {
        let fixed_delta = self.args.fixed_delta();
        if let Err(e) = validate_fixed_delta(fixed_delta) {
            log::error!("{}", e);
            return Err(e);
        }

        let realtime = self.args.realtime();
        let target = if realtime {
            match Duration::try_from_secs_f32(fixed_delta) {
                Ok(target) => target,
                Err(e) => {
                    let e = AppError::InvalidConfig(format!(
                        "frame step {fixed_delta}s cannot pace realtime frames: {e}"
                    ));
                    log::error!("{}", e);
                    return Err(e);
                }
            }
        } else {
            Duration::ZERO
        };
        let mut ctx = AppContext::new(realtime, self.cancellation.clone());

        log::info!(
            "Starting frame loop (dt={}s, realtime={}, max_frames={:?})",
            fixed_delta,
            realtime,
            self.args.max_frames()
        );

        if let Err(e) = self.handler.on_init(&mut ctx) {
            log::error!("Initialization failed: {}", e);
            self.handler.on_shutdown(&mut ctx);
            return Err(e);
        }

        let mut last_frame_time = Instant::now();

        let reason = loop {
            if self.cancellation.is_cancelled() {
                log::info!("Cancelled after {} frames", ctx.frame_number);
                break StopReason::Cancelled;
            }

            if let Some(max_frames) = self.args.max_frames()
                && ctx.frame_number >= max_frames
            {
                log::info!("Reached max frames limit ({}), exiting", max_frames);
                break StopReason::MaxFrames;
            }

            let delta_time = if realtime {
                let since = last_frame_time.elapsed();
                if since < target {
                    std::thread::sleep(target - since);
                }
                let now = Instant::now();
                let delta = now.duration_since(last_frame_time).as_secs_f32();
                last_frame_time = now;
                delta
            } else {
                fixed_delta
            };
            ctx.advance(delta_time);
            log::trace!("Frame {} (dt={})", ctx.frame_number, delta_time);

            let keep_running = match self.handler.on_update(&mut ctx) {
                Ok(keep_running) => keep_running,
                Err(e) => {
                    log::error!("Frame {} failed: {}", ctx.frame_number, e);
                    self.handler.on_shutdown(&mut ctx);
                    return Err(e);
                }
            };
            ctx.frame_number += 1;

            if !keep_running {
                log::info!("Handler finished after {} frames", ctx.frame_number);
                break StopReason::Finished;
            }
        };

        self.handler.on_shutdown(&mut ctx);

        Ok(RunSummary {
            frames: ctx.frame_number,
            elapsed_time: ctx.elapsed_time,
            reason,
        })
    }
}
