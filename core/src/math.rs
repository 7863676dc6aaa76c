//! Math type aliases and helper functions.
//!
//! All geometry is f32, matching what a renderer consumes.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32). Shape anchors live on the z = 0 plane.
pub type Vec3 = nalgebra::Vector3<f32>;

/// Out-of-plane axis used to derive ribbon perpendiculars for 2D shapes.
pub fn forward_axis() -> Vec3 {
    Vec3::new(0.0, 0.0, 1.0)
}

/// Point on the z = 0 plane.
#[inline]
pub fn point2(x: f32, y: f32) -> Vec3 {
    Vec3::new(x, y, 0.0)
}

/// Linear interpolation. `t >= 1` returns `end` exactly, `t <= 0` returns `start`.
pub fn lerp(start: &Vec3, end: &Vec3, t: f32) -> Vec3 {
    if t >= 1.0 {
        *end
    } else if t <= 0.0 {
        *start
    } else {
        start + (end - start) * t
    }
}

/// Move `current` toward `target` by at most `max_delta` units of distance.
///
/// Snaps to `target` once the remaining distance is within `max_delta`.
pub fn move_towards(current: &Vec3, target: &Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.norm();
    if distance <= max_delta || distance == 0.0 {
        *target
    } else {
        current + delta / distance * max_delta
    }
}

/// Quadratic Bezier `B(t) = (1-t)^2 p0 + 2(1-t)t p1 + t^2 p2`.
pub fn quadratic_bezier(t: f32, p0: &Vec3, p1: &Vec3, p2: &Vec3) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Ribbon offset for an edge: `normalize(cross(direction, forward)) * half_width`.
///
/// Returns `None` for zero-length edges and for edges parallel to the forward
/// axis, which have no in-plane perpendicular.
pub fn edge_perpendicular(start: &Vec3, end: &Vec3, half_width: f32) -> Option<Vec3> {
    let direction = (end - start).try_normalize(0.0)?;
    direction
        .cross(&forward_axis())
        .try_normalize(f32::EPSILON)
        .map(|p| p * half_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_clamps_to_endpoints() {
        let a = point2(0.0, 0.0);
        let b = point2(2.0, 1.0);
        assert_eq!(lerp(&a, &b, 1.3), b);
        assert_eq!(lerp(&a, &b, -0.5), a);
        assert!((lerp(&a, &b, 0.5) - point2(1.0, 0.5)).norm() < 1e-6);
    }

    #[test]
    fn move_towards_snaps_when_close() {
        let a = point2(0.0, 0.0);
        let b = point2(3.0, 4.0);
        let step = move_towards(&a, &b, 1.0);
        assert!((step - point2(0.6, 0.8)).norm() < 1e-6);
        assert_eq!(move_towards(&step, &b, 10.0), b);
        assert_eq!(move_towards(&b, &b, 0.0), b);
    }

    #[test]
    fn bezier_hits_endpoints() {
        let p0 = point2(-0.5, 0.0);
        let p1 = point2(-1.0, 1.2);
        let p2 = point2(0.0, 0.75);
        assert_eq!(quadratic_bezier(0.0, &p0, &p1, &p2), p0);
        assert_eq!(quadratic_bezier(1.0, &p0, &p1, &p2), p2);
        let mid = quadratic_bezier(0.5, &p0, &p1, &p2);
        assert!((mid - point2(-0.625, 0.7875)).norm() < 1e-6);
    }

    #[test]
    fn perpendicular_of_x_axis_edge() {
        let p = edge_perpendicular(&point2(0.0, 0.0), &point2(5.0, 0.0), 0.25).unwrap();
        assert!((p - Vec3::new(0.0, -0.25, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn perpendicular_rejects_degenerate_edges() {
        let a = point2(1.0, 1.0);
        assert!(edge_perpendicular(&a, &a, 0.1).is_none());
        assert!(edge_perpendicular(&a, &Vec3::new(1.0, 1.0, 2.0), 0.1).is_none());
    }
}
