//! Anchor generators for the traced shapes.
//!
//! Every generator is a pure function of its parameters: identical inputs
//! produce identical anchors. Counts must be at least 1 and scalars finite,
//! otherwise [`RibbonError::InvalidParameter`] is returned.
//!
//! [`RibbonError::InvalidParameter`]: crate::RibbonError::InvalidParameter

use std::f32::consts::{PI, TAU};

use crate::error::{RibbonResult, ensure_count, ensure_finite};
use crate::math::{Vec3, point2, quadratic_bezier};

use super::anchors::{AnchorSequence, Group, Traversal};

/// Sample `segments + 1` points on an arc.
///
/// # Arguments
///
/// * `center` - Arc center
/// * `radius` - Arc radius
/// * `start_angle` - Angle of the first sample, in radians
/// * `sweep` - Angle covered by the arc, in radians
/// * `segments` - Number of chords approximating the arc
pub fn arc_points(
    center: Vec3,
    radius: f32,
    start_angle: f32,
    sweep: f32,
    segments: u32,
) -> RibbonResult<Vec<Vec3>> {
    ensure_finite("radius", radius)?;
    ensure_finite("start angle", start_angle)?;
    ensure_finite("sweep", sweep)?;
    ensure_count("segments", segments)?;

    Ok((0..=segments)
        .map(|i| {
            let angle = start_angle + sweep * i as f32 / segments as f32;
            Vec3::new(
                angle.cos() * radius + center.x,
                angle.sin() * radius + center.y,
                0.0,
            )
        })
        .collect())
}

/// Sample `segments + 1` points on a full circle, angle 0 to 2*pi inclusive.
///
/// The last sample lands (numerically close to) the first.
pub fn circle_points(center: Vec3, radius: f32, segments: u32) -> RibbonResult<Vec<Vec3>> {
    ensure_finite("radius", radius)?;
    ensure_count("segments", segments)?;

    Ok((0..=segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            Vec3::new(
                angle.cos() * radius + center.x,
                angle.sin() * radius + center.y,
                0.0,
            )
        })
        .collect())
}

/// Alternate outer and inner radius at `points` equally spaced angles.
///
/// Even indices sit on the outer radius.
pub fn star_points(outer_radius: f32, inner_radius: f32, points: u32) -> RibbonResult<Vec<Vec3>> {
    ensure_finite("outer radius", outer_radius)?;
    ensure_finite("inner radius", inner_radius)?;
    ensure_count("star points", points)?;

    Ok((0..points)
        .map(|i| {
            let angle = i as f32 * TAU / points as f32;
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            point2(angle.cos() * radius, angle.sin() * radius)
        })
        .collect())
}

/// Sample `resolution + 1` points on a quadratic Bezier curve, t = 0 to 1.
pub fn bezier_points(p0: Vec3, p1: Vec3, p2: Vec3, resolution: u32) -> RibbonResult<Vec<Vec3>> {
    ensure_count("curve resolution", resolution)?;

    Ok((0..=resolution)
        .map(|i| {
            let t = i as f32 / resolution as f32;
            quadratic_bezier(t, &p0, &p1, &p2)
        })
        .collect())
}

/// Circle outline, closed back to the first sample.
pub fn circle(center: Vec3, radius: f32, segments: u32) -> RibbonResult<AnchorSequence> {
    AnchorSequence::closed(circle_points(center, radius, segments)?)
}

/// Open arc.
pub fn arc(
    center: Vec3,
    radius: f32,
    start_angle: f32,
    sweep: f32,
    segments: u32,
) -> RibbonResult<AnchorSequence> {
    AnchorSequence::open(arc_points(center, radius, start_angle, sweep, segments)?)
}

/// Star outline, connecting every anchor to the one two places ahead.
pub fn star(outer_radius: f32, inner_radius: f32, points: u32) -> RibbonResult<AnchorSequence> {
    AnchorSequence::new(
        star_points(outer_radius, inner_radius, points)?,
        Traversal::Skip { stride: 2 },
    )
}

/// Axis-aligned square with its bottom-left corner at the origin.
pub fn square(side: f32) -> RibbonResult<AnchorSequence> {
    ensure_finite("side length", side)?;
    AnchorSequence::closed(vec![
        point2(0.0, 0.0),
        point2(side, 0.0),
        point2(side, side),
        point2(0.0, side),
    ])
}

/// Heart: two Bezier lobes meeting at the top center, closed at a bottom point.
///
/// The right lobe starts on the left lobe's last sample, so the outline holds
/// one duplicated consecutive anchor.
pub fn heart(size: f32, curve_resolution: u32) -> RibbonResult<AnchorSequence> {
    ensure_finite("size", size)?;

    let top = point2(0.0, size * 0.75);
    let mut points = bezier_points(
        point2(-size * 0.5, 0.0),
        point2(-size, size * 1.2),
        top,
        curve_resolution,
    )?;
    points.extend(bezier_points(
        top,
        point2(size, size * 1.2),
        point2(size * 0.5, 0.0),
        curve_resolution,
    )?);
    points.push(point2(0.0, -size));

    AnchorSequence::closed(points)
}

/// Fish: diamond body plus an open triangular tail hanging off its nose.
pub fn fish(size: f32) -> RibbonResult<AnchorSequence> {
    ensure_finite("size", size)?;

    let points = vec![
        // Body
        point2(-size, 0.0),
        point2(0.0, size / 2.0),
        point2(size, 0.0),
        point2(0.0, -size / 2.0),
        // Tail, starting and ending on the body's right point
        point2(size, 0.0),
        point2(size * 1.5, size * 0.5),
        point2(size * 1.5, -size * 0.5),
        point2(size, 0.0),
    ];

    AnchorSequence::new(
        points,
        Traversal::Grouped(vec![Group::closed(0, 4), Group::open(4, 4)]),
    )
}

/// House: square body and a two-sided roof.
pub fn house(size: f32) -> RibbonResult<AnchorSequence> {
    ensure_finite("size", size)?;

    let points = vec![
        // Body
        point2(-size, -size),
        point2(size, -size),
        point2(size, size),
        point2(-size, size),
        // Roof: left eave, peak, right eave
        point2(-size, size),
        point2(0.0, size * 1.5),
        point2(size, size),
    ];

    AnchorSequence::new(
        points,
        Traversal::Grouped(vec![Group::closed(0, 4), Group::open(4, 3)]),
    )
}

/// Duck: head, neck, body, wing and two feet as separate sub-shapes.
///
/// Every part is closed, so the two-point neck and feet are stroked there
/// and back, and the body corners cross over into a bow.
pub fn duck(size: f32) -> RibbonResult<AnchorSequence> {
    ensure_finite("size", size)?;

    let points = vec![
        // Head
        point2(-size * 0.1, size * 0.9),
        point2(size * 0.1, size * 0.9),
        point2(0.0, size),
        // Neck
        point2(-size * 0.05, size * 0.6),
        point2(size * 0.05, size * 0.6),
        // Body
        point2(-size * 0.4, 0.0),
        point2(size * 0.4, 0.0),
        point2(-size * 0.3, size * 0.4),
        point2(size * 0.3, size * 0.4),
        // Wing
        point2(-size * 0.2, size * 0.3),
        point2(0.0, size * 0.2),
        point2(size * 0.2, size * 0.3),
        // Feet
        point2(-size * 0.2, -size * 0.1),
        point2(-size * 0.1, -size * 0.2),
        point2(size * 0.2, -size * 0.1),
        point2(size * 0.1, -size * 0.2),
    ];

    AnchorSequence::new(
        points,
        Traversal::Grouped(vec![
            Group::closed(0, 3),
            Group::closed(3, 2),
            Group::closed(5, 4),
            Group::closed(9, 3),
            Group::closed(12, 2),
            Group::closed(14, 2),
        ]),
    )
}

/// Ship: trapezoid hull, mast and a triangular sail.
pub fn ship(size: f32) -> RibbonResult<AnchorSequence> {
    ensure_finite("size", size)?;

    let points = [
        // Hull
        (-0.6, -0.5),
        (0.6, -0.5),
        (1.0, 0.0),
        (-1.0, 0.0),
        // Mast
        (0.0, 0.0),
        (0.0, 1.2),
        // Sail
        (0.0, 1.0),
        (-0.5, 0.5),
        (0.0, 0.5),
    ]
    .into_iter()
    .map(|(x, y)| point2(x, y) * size)
    .collect();

    AnchorSequence::new(
        points,
        Traversal::Grouped(vec![
            Group::closed(0, 4),
            Group::open(4, 2),
            Group::closed(6, 3),
        ]),
    )
}

/// Parameters for [`smiley`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmileyParams {
    pub face_radius: f32,
    pub eye_radius: f32,
    pub mouth_radius: f32,
    /// Eyes sit at `(-x, y)` and `(x, y)`.
    pub eye_offset: Vec3,
    pub mouth_center: Vec3,
    pub segments: u32,
}

impl Default for SmileyParams {
    fn default() -> Self {
        Self {
            face_radius: 1.5,
            eye_radius: 0.3,
            mouth_radius: 0.8,
            eye_offset: point2(0.6, 0.5),
            mouth_center: point2(0.0, -0.1),
            segments: 50,
        }
    }
}

/// Smiley: face circle, two eye circles and a downward mouth arc.
pub fn smiley(params: &SmileyParams) -> RibbonResult<AnchorSequence> {
    let eye_left = point2(-params.eye_offset.x, params.eye_offset.y);
    let eye_right = point2(params.eye_offset.x, params.eye_offset.y);

    let parts = [
        (circle_points(Vec3::zeros(), params.face_radius, params.segments)?, true),
        (circle_points(eye_left, params.eye_radius, params.segments)?, true),
        (circle_points(eye_right, params.eye_radius, params.segments)?, true),
        (
            arc_points(params.mouth_center, params.mouth_radius, PI, PI, params.segments)?,
            false,
        ),
    ];

    let mut points = Vec::new();
    let mut groups = Vec::with_capacity(parts.len());
    for (part, closed) in parts {
        groups.push(Group {
            start: points.len(),
            len: part.len(),
            closed,
        });
        points.extend(part);
    }

    AnchorSequence::new(points, Traversal::Grouped(groups))
}
