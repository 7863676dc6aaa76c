//! Vertex generators: shape parameters in, [`AnchorSequence`] out.
//!
//! - [`AnchorSequence`] - Ordered anchors plus a [`Traversal`] strategy
//! - [`generators`] - Pure per-shape anchor generators
//! - [`Shape`] - Parameterized shape catalogue dispatching to the generators

mod anchors;
pub mod generators;

pub use anchors::{AnchorSequence, Group, Traversal};
pub use generators::SmileyParams;

use crate::error::{RibbonError, RibbonResult};
use crate::math::{Vec3, point2};

/// A traceable shape and its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Single straight stroke.
    Line { start: Vec3, end: Vec3 },
    /// Closed triangle through three corners.
    Triangle { a: Vec3, b: Vec3, c: Vec3 },
    /// Square with its bottom-left corner at the origin.
    Square { side: f32 },
    /// Full circle.
    Circle {
        center: Vec3,
        radius: f32,
        segments: u32,
    },
    /// Open circular arc.
    Arc {
        center: Vec3,
        radius: f32,
        start_angle: f32,
        sweep: f32,
        segments: u32,
    },
    /// Star traced by skipping every other anchor.
    Star {
        outer_radius: f32,
        inner_radius: f32,
        points: u32,
    },
    /// Heart from two quadratic Bezier lobes.
    Heart { size: f32, curve_resolution: u32 },
    Duck { size: f32 },
    Fish { size: f32 },
    House { size: f32 },
    Ship { size: f32 },
    Smiley(SmileyParams),
}

impl Shape {
    /// Every shape with its stock parameters.
    pub fn catalogue() -> Vec<Shape> {
        vec![
            Shape::Line {
                start: point2(0.0, 0.0),
                end: point2(2.0, 1.0),
            },
            Shape::Triangle {
                a: point2(0.0, 0.0),
                b: point2(2.0, 0.0),
                c: point2(1.0, 2.0),
            },
            Shape::Square { side: 2.0 },
            Shape::Circle {
                center: Vec3::zeros(),
                radius: 1.0,
                segments: 100,
            },
            Shape::Arc {
                center: Vec3::zeros(),
                radius: 1.0,
                start_angle: std::f32::consts::PI,
                sweep: std::f32::consts::PI,
                segments: 50,
            },
            Shape::Star {
                outer_radius: 2.0,
                inner_radius: 1.0,
                points: 10,
            },
            Shape::Heart {
                size: 1.0,
                curve_resolution: 20,
            },
            Shape::Duck { size: 1.0 },
            Shape::Fish { size: 1.0 },
            Shape::House { size: 1.0 },
            Shape::Ship { size: 1.0 },
            Shape::Smiley(SmileyParams::default()),
        ]
    }

    /// Look up a stock shape by its [`name`](Self::name).
    pub fn by_name(name: &str) -> Option<Shape> {
        let name = name.to_ascii_lowercase();
        Self::catalogue().into_iter().find(|s| s.name() == name)
    }

    /// Lowercase shape name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Triangle { .. } => "triangle",
            Self::Square { .. } => "square",
            Self::Circle { .. } => "circle",
            Self::Arc { .. } => "arc",
            Self::Star { .. } => "star",
            Self::Heart { .. } => "heart",
            Self::Duck { .. } => "duck",
            Self::Fish { .. } => "fish",
            Self::House { .. } => "house",
            Self::Ship { .. } => "ship",
            Self::Smiley(_) => "smiley",
        }
    }

    /// Generate the anchor sequence for this shape.
    pub fn anchors(&self) -> RibbonResult<AnchorSequence> {
        match self {
            Self::Line { start, end } => AnchorSequence::open(vec![*start, *end]),
            Self::Triangle { a, b, c } => AnchorSequence::closed(vec![*a, *b, *c]),
            Self::Square { side } => generators::square(*side),
            Self::Circle {
                center,
                radius,
                segments,
            } => generators::circle(*center, *radius, *segments),
            Self::Arc {
                center,
                radius,
                start_angle,
                sweep,
                segments,
            } => generators::arc(*center, *radius, *start_angle, *sweep, *segments),
            Self::Star {
                outer_radius,
                inner_radius,
                points,
            } => generators::star(*outer_radius, *inner_radius, *points),
            Self::Heart {
                size,
                curve_resolution,
            } => generators::heart(*size, *curve_resolution),
            Self::Duck { size } => generators::duck(*size),
            Self::Fish { size } => generators::fish(*size),
            Self::House { size } => generators::house(*size),
            Self::Ship { size } => generators::ship(*size),
            Self::Smiley(params) => generators::smiley(params),
        }
    }
}

impl std::str::FromStr for Shape {
    type Err = RibbonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s).ok_or_else(|| {
            RibbonError::InvalidParameter(format!("unknown shape '{s}'"))
        })
    }
}
