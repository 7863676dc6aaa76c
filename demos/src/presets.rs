//! Per-shape scene presets.
//!
//! Each stock shape has a preset reproducing how its scene is traced:
//! the smooth curves (circle, smiley) lerp and keep their trail, the ship
//! lerps and wipes itself after a second, the duck keeps every edge at half a
//! second apiece, and the remaining line-art shapes move at a
//! constant rate with only the current stroke visible.

use muraltrace_core::{PostCompletion, Retention, RibbonSettings, Shape, Stepping};

/// Line thickness shared by every preset.
pub const PRESET_THICKNESS: f32 = 0.05;

/// A stock shape paired with its animation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePreset {
    pub shape: Shape,
    pub settings: RibbonSettings,
}

impl ScenePreset {
    /// Preset for a stock shape.
    pub fn for_shape(shape: Shape) -> Self {
        let base = RibbonSettings::new().with_thickness(PRESET_THICKNESS);
        let settings = match shape.name() {
            "circle" => base
                .with_speed(1.0)
                .with_stepping(Stepping::Lerp)
                .with_retention(Retention::Accumulating),
            "smiley" => base
                .with_speed(1.0)
                .with_stepping(Stepping::Lerp)
                .with_retention(Retention::Accumulating)
                .with_post_completion(PostCompletion::ClearAfter(2.0)),
            "ship" => base
                .with_speed(1.0)
                .with_stepping(Stepping::Lerp)
                .with_retention(Retention::Transient)
                .with_post_completion(PostCompletion::ClearAfter(1.0)),
            // Half a second per edge, every edge kept
            "duck" => base
                .with_speed(2.0)
                .with_stepping(Stepping::Lerp)
                .with_retention(Retention::Accumulating),
            "arc" => base
                .with_speed(1.0)
                .with_stepping(Stepping::Lerp)
                .with_retention(Retention::Transient),
            // Slow constant-rate tracing of the curve samples
            "heart" => base
                .with_speed(0.05)
                .with_stepping(Stepping::MoveTowards)
                .with_retention(Retention::Transient),
            _ => base
                .with_speed(0.5)
                .with_stepping(Stepping::MoveTowards)
                .with_retention(Retention::Transient),
        };
        Self { shape, settings }
    }

    /// Preset for a stock shape looked up by name.
    pub fn by_name(name: &str) -> Option<Self> {
        Shape::by_name(name).map(Self::for_shape)
    }

    /// Presets for every stock shape.
    pub fn all() -> Vec<Self> {
        Shape::catalogue().into_iter().map(Self::for_shape).collect()
    }

    pub fn name(&self) -> &'static str {
        self.shape.name()
    }

    /// Apply command line overrides on top of this preset.
    pub fn with_overrides(mut self, overrides: &SceneOverrides) -> Self {
        self.settings = overrides.apply(self.settings);
        self
    }
}

/// Settings that replace preset values when present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneOverrides {
    pub thickness: Option<f32>,
    pub speed: Option<f32>,
    pub stepping: Option<Stepping>,
    pub retention: Option<Retention>,
    pub clear_after: Option<f32>,
}

impl SceneOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay the present values onto `settings`.
    pub fn apply(&self, mut settings: RibbonSettings) -> RibbonSettings {
        if let Some(thickness) = self.thickness {
            settings = settings.with_thickness(thickness);
        }
        if let Some(speed) = self.speed {
            settings = settings.with_speed(speed);
        }
        if let Some(stepping) = self.stepping {
            settings = settings.with_stepping(stepping);
        }
        if let Some(retention) = self.retention {
            settings = settings.with_retention(retention);
        }
        if let Some(delay) = self.clear_after {
            settings = settings.with_post_completion(PostCompletion::ClearAfter(delay));
        }
        settings
    }
}
