//! Animation settings.

use crate::error::{RibbonResult, ensure_finite, ensure_positive};

/// How the moving end of a ribbon advances each tick.
///
/// The two strategies time edges differently and are kept separate on purpose:
/// under [`Lerp`](Self::Lerp) every edge takes the same number of ticks, under
/// [`MoveTowards`](Self::MoveTowards) longer edges take longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stepping {
    /// `progress += dt * speed`, position `lerp(start, end, progress)`.
    #[default]
    Lerp,
    /// Move `dt / speed` units of distance toward the end.
    MoveTowards,
}

/// What happens to finished ribbon quads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retention {
    /// Every tick's quad stays in the buffer. Prior ticks of the same edge
    /// remain too, stacked under the newest one.
    #[default]
    Accumulating,
    /// Only the in-progress quad is kept ("traveling line", no trail).
    Transient,
}

/// Action taken once the last edge has been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PostCompletion {
    /// Leave the mesh as drawn.
    #[default]
    None,
    /// Hold for the given number of seconds of tick time, then clear the mesh.
    ClearAfter(f32),
}

/// Ribbon animation settings.
///
/// # Example
///
/// ```ignore
/// let settings = RibbonSettings::new()
///     .with_thickness(0.05)
///     .with_speed(0.5)
///     .with_stepping(Stepping::MoveTowards)
///     .with_retention(Retention::Transient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonSettings {
    /// Full ribbon width. Each side is offset by half of it.
    pub thickness: f32,
    /// Draw speed; meaning depends on [`Stepping`].
    pub speed: f32,
    pub stepping: Stepping,
    pub retention: Retention,
    pub post_completion: PostCompletion,
}

impl Default for RibbonSettings {
    fn default() -> Self {
        Self {
            thickness: 0.05,
            speed: 1.0,
            stepping: Stepping::Lerp,
            retention: Retention::Accumulating,
            post_completion: PostCompletion::None,
        }
    }
}

impl RibbonSettings {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ribbon thickness.
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the draw speed.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the stepping strategy.
    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.stepping = stepping;
        self
    }

    /// Set the retention policy.
    pub fn with_retention(mut self, retention: Retention) -> Self {
        self.retention = retention;
        self
    }

    /// Set the post-completion action.
    pub fn with_post_completion(mut self, post_completion: PostCompletion) -> Self {
        self.post_completion = post_completion;
        self
    }

    /// Fail fast on values that would poison the mesh or never terminate.
    pub fn validate(&self) -> RibbonResult<()> {
        ensure_positive("thickness", self.thickness)?;
        ensure_positive("speed", self.speed)?;
        if let PostCompletion::ClearAfter(seconds) = self.post_completion {
            ensure_finite("clear delay", seconds)?;
            if seconds < 0.0 {
                return Err(crate::RibbonError::InvalidParameter(format!(
                    "clear delay must not be negative, got {seconds}"
                )));
            }
        }
        Ok(())
    }

    /// Half the thickness: the perpendicular offset magnitude.
    pub fn half_width(&self) -> f32 {
        self.thickness * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RibbonError;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RibbonSettings::new().validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let settings = RibbonSettings::new()
            .with_thickness(0.2)
            .with_speed(0.5)
            .with_stepping(Stepping::MoveTowards)
            .with_retention(Retention::Transient)
            .with_post_completion(PostCompletion::ClearAfter(1.0));

        assert_eq!(settings.half_width(), 0.1);
        assert_eq!(settings.stepping, Stepping::MoveTowards);
        assert_eq!(settings.retention, Retention::Transient);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad = [
            RibbonSettings::new().with_speed(-1.0),
            RibbonSettings::new().with_speed(0.0),
            RibbonSettings::new().with_thickness(f32::NAN),
            RibbonSettings::new().with_thickness(f32::INFINITY),
            RibbonSettings::new().with_post_completion(PostCompletion::ClearAfter(-2.0)),
            RibbonSettings::new().with_post_completion(PostCompletion::ClearAfter(f32::NAN)),
        ];
        for settings in bad {
            assert!(
                matches!(settings.validate(), Err(RibbonError::InvalidParameter(_))),
                "{settings:?} should be rejected"
            );
        }
    }
}
