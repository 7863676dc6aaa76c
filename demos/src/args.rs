//! `shape_demo` command line.

use clap::Parser;
use muraltrace_app::{AppArgs, DefaultAppArgs, FrameArgs};
use muraltrace_core::{Retention, Shape, Stepping};

use crate::presets::{SceneOverrides, ScenePreset};

/// Stepping strategy selection for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliStepping {
    /// Fixed number of ticks per edge regardless of its length.
    Lerp,
    /// Constant distance per tick.
    MoveTowards,
}

impl From<CliStepping> for Stepping {
    fn from(cli: CliStepping) -> Self {
        match cli {
            CliStepping::Lerp => Stepping::Lerp,
            CliStepping::MoveTowards => Stepping::MoveTowards,
        }
    }
}

/// Retention policy selection for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliRetention {
    /// Keep every drawn quad.
    Accumulating,
    /// Show only the stroke being drawn.
    Transient,
}

impl From<CliRetention> for Retention {
    fn from(cli: CliRetention) -> Self {
        match cli {
            CliRetention::Accumulating => Retention::Accumulating,
            CliRetention::Transient => Retention::Transient,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "shape_demo",
    about = "Trace stock shapes as growing ribbon meshes",
    long_about = "Traces stock shapes as growing ribbon meshes, headlessly.\n\n\
        Each shape runs its own scene preset unless overridden.\n\
        \n\
        EXAMPLES:\n\
          # Trace every shape with its preset\n\
          ./shape_demo\n\
        \n\
          # Trace the star and the heart, keeping the whole trail\n\
          ./shape_demo --shape star --shape heart --retention accumulating\n\
        \n\
          # Trace a circle in wall-clock time\n\
          ./shape_demo --shape circle --realtime",
    version
)]
struct ClapArgs {
    /// Shape to trace (repeatable). Defaults to every stock shape.
    #[arg(long = "shape", value_name = "NAME")]
    shapes: Vec<Shape>,

    /// Full ribbon width.
    #[arg(long)]
    thickness: Option<f32>,

    /// Draw speed (progress per second for lerp, seconds per unit for move-towards).
    #[arg(long)]
    speed: Option<f32>,

    /// How the moving end advances each frame.
    #[arg(long, value_enum)]
    stepping: Option<CliStepping>,

    /// Whether drawn strokes stay visible.
    #[arg(long, value_enum)]
    retention: Option<CliRetention>,

    /// Clear the mesh this many seconds after the last edge.
    #[arg(long, value_name = "SECS")]
    clear_after: Option<f32>,

    #[command(flatten)]
    frame: FrameArgs,
}

/// Parsed `shape_demo` arguments.
#[derive(Debug, Clone)]
pub struct DemoArgs {
    shapes: Vec<Shape>,
    overrides: SceneOverrides,
    app: DefaultAppArgs,
}

impl DemoArgs {
    /// Parse from an explicit argument list.
    pub fn try_parse_from<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        ClapArgs::try_parse_from(argv).map(Self::from)
    }

    /// Presets for the selected shapes with the overrides applied.
    pub fn scenes(&self) -> Vec<ScenePreset> {
        let presets = if self.shapes.is_empty() {
            ScenePreset::all()
        } else {
            self.shapes
                .iter()
                .cloned()
                .map(ScenePreset::for_shape)
                .collect()
        };
        presets
            .into_iter()
            .map(|p| p.with_overrides(&self.overrides))
            .collect()
    }

    pub fn overrides(&self) -> &SceneOverrides {
        &self.overrides
    }
}

impl From<ClapArgs> for DemoArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            shapes: args.shapes,
            overrides: SceneOverrides {
                thickness: args.thickness,
                speed: args.speed,
                stepping: args.stepping.map(Into::into),
                retention: args.retention.map(Into::into),
                clear_after: args.clear_after,
            },
            app: args.frame.into(),
        }
    }
}

impl AppArgs for DemoArgs {
    fn parse() -> Self {
        ClapArgs::parse().into()
    }

    fn fixed_delta(&self) -> f32 {
        self.app.fixed_delta()
    }

    fn realtime(&self) -> bool {
        self.app.realtime()
    }

    fn max_frames(&self) -> Option<u64> {
        self.app.max_frames()
    }
}
