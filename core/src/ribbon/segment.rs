//! A single growing ribbon quad.

use crate::math::{Vec3, edge_perpendicular, lerp, move_towards};

use super::settings::Stepping;

/// The in-progress quad for one edge.
///
/// Corners are `[start - p, start + p, current - p, current + p]` where `p`
/// is the perpendicular offset. The quad starts with zero length
/// (`current == start`) and is finished once `current == end`.
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonSegment {
    start: Vec3,
    end: Vec3,
    perpendicular: Vec3,
    current: Vec3,
    progress: f32,
}

impl RibbonSegment {
    /// Begin a segment, or `None` if the edge has no direction.
    pub fn new(start: Vec3, end: Vec3, half_width: f32) -> Option<Self> {
        let perpendicular = edge_perpendicular(&start, &end, half_width)?;
        Some(Self {
            start,
            end,
            perpendicular,
            current: start,
            progress: 0.0,
        })
    }

    /// Advance by one tick. Returns `true` when the segment has reached its end.
    pub fn advance(&mut self, stepping: Stepping, speed: f32, dt: f32) -> bool {
        match stepping {
            Stepping::Lerp => {
                self.progress += dt * speed;
                self.current = lerp(&self.start, &self.end, self.progress);
            }
            Stepping::MoveTowards => {
                self.current = move_towards(&self.current, &self.end, dt / speed);
                let length = (self.end - self.start).norm();
                self.progress = if self.current == self.end {
                    1.0
                } else {
                    (self.current - self.start).norm() / length
                };
            }
        }
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.current == self.end
    }

    /// Quad corners in winding order.
    pub fn corners(&self) -> [Vec3; 4] {
        [
            self.start - self.perpendicular,
            self.start + self.perpendicular,
            self.current - self.perpendicular,
            self.current + self.perpendicular,
        ]
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// Moving end of the quad.
    pub fn current(&self) -> Vec3 {
        self.current
    }

    pub fn perpendicular(&self) -> Vec3 {
        self.perpendicular
    }

    /// Fraction drawn. May exceed 1.0 on the final [`Stepping::Lerp`] tick.
    pub fn progress(&self) -> f32 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point2;

    #[test]
    fn test_degenerate_edge_has_no_segment() {
        let p = point2(1.0, 2.0);
        assert!(RibbonSegment::new(p, p, 0.05).is_none());
    }

    #[test]
    fn test_starts_with_zero_length() {
        let seg = RibbonSegment::new(point2(0.0, 0.0), point2(2.0, 0.0), 0.1).unwrap();
        let c = seg.corners();
        assert_eq!(c[0], c[2]);
        assert_eq!(c[1], c[3]);
        assert!(!seg.is_finished());
    }

    #[test]
    fn test_lerp_ticks_are_independent_of_length() {
        for length in [0.5, 4.0] {
            let mut seg = RibbonSegment::new(point2(0.0, 0.0), point2(length, 0.0), 0.1).unwrap();
            let mut ticks = 0;
            while !seg.advance(Stepping::Lerp, 1.0, 0.25) {
                ticks += 1;
            }
            assert_eq!(ticks + 1, 4);
        }
    }

    #[test]
    fn test_move_towards_ticks_scale_with_length() {
        let count = |length: f32| {
            let mut seg = RibbonSegment::new(point2(0.0, 0.0), point2(length, 0.0), 0.1).unwrap();
            let mut ticks = 1;
            while !seg.advance(Stepping::MoveTowards, 0.5, 0.25) {
                ticks += 1;
            }
            ticks
        };
        // 0.5 units per tick
        assert_eq!(count(1.0), 2);
        assert_eq!(count(4.0), 8);
    }

    #[test]
    fn test_final_corners_straddle_end() {
        let end = point2(2.0, 1.0);
        let mut seg = RibbonSegment::new(point2(0.0, 0.0), end, 0.05).unwrap();
        while !seg.advance(Stepping::Lerp, 1.0, 0.3) {}
        assert_eq!(seg.current(), end);
        let p = seg.perpendicular();
        assert_eq!(seg.corners()[2], end - p);
        assert_eq!(seg.corners()[3], end + p);
        assert!((p.norm() - 0.05).abs() < 1e-6);
    }
}
