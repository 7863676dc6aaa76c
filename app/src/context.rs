//! Per-frame application context.

use crate::cancellation::CancellationToken;

/// Application context available during all handler callbacks.
///
/// Carries frame timing and the loop's cancellation token.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Current frame number.
    pub(crate) frame_number: u64,
    /// Delta time since last frame in seconds.
    pub(crate) delta_time: f32,
    /// Simulated time since application start in seconds.
    pub(crate) elapsed_time: f32,
    /// Whether deltas are measured from the wall clock.
    pub(crate) realtime: bool,
    pub(crate) cancellation: CancellationToken,
}

impl AppContext {
    pub(crate) fn new(realtime: bool, cancellation: CancellationToken) -> Self {
        Self {
            frame_number: 0,
            delta_time: 0.0,
            elapsed_time: 0.0,
            realtime,
            cancellation,
        }
    }

    /// Get the current frame number.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Get the delta time since last frame in seconds.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the elapsed time since application start in seconds.
    ///
    /// This is the sum of every delta handed out so far, so in fixed-step mode
    /// it is independent of how fast the loop actually runs.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    pub fn is_realtime(&self) -> bool {
        self.realtime
    }

    /// Get a handle to the loop's cancellation token.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Ask the loop to stop after the current frame.
    pub fn request_stop(&self) {
        self.cancellation.cancel();
    }

    pub(crate) fn advance(&mut self, delta_time: f32) {
        self.delta_time = delta_time;
        self.elapsed_time += delta_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_elapsed_time() {
        let mut ctx = AppContext::new(false, CancellationToken::new());
        ctx.advance(0.25);
        ctx.advance(0.5);
        assert_eq!(ctx.delta_time(), 0.5);
        assert_eq!(ctx.elapsed_time(), 0.75);
        assert_eq!(ctx.frame_number(), 0);
    }

    #[test]
    fn test_request_stop_cancels_shared_token() {
        let token = CancellationToken::new();
        let ctx = AppContext::new(false, token.clone());
        ctx.request_stop();
        assert!(token.is_cancelled());
    }
}
