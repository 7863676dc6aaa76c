//! Anchor sequences and the order their edges are traced in.

use crate::error::{RibbonError, RibbonResult};
use crate::math::Vec3;

/// A sub-shape over a local range of anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// First anchor of the group.
    pub start: usize,
    /// Number of anchors in the group.
    pub len: usize,
    /// Whether the last anchor connects back to the first.
    pub closed: bool,
}

impl Group {
    /// Closed polygon over `len` anchors starting at `start`.
    pub fn closed(start: usize, len: usize) -> Self {
        Self {
            start,
            len,
            closed: true,
        }
    }

    /// Open polyline over `len` anchors starting at `start`.
    pub fn open(start: usize, len: usize) -> Self {
        Self {
            start,
            len,
            closed: false,
        }
    }
}

/// Edge traversal strategy over an anchor list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Traversal {
    /// `i -> i + 1`, plus `last -> first` when closed.
    Sequential { closed: bool },
    /// `i -> (i + stride) mod n` for every anchor. Stride 2 traces a star.
    Skip { stride: usize },
    /// Independent sub-shapes traced one after another.
    Grouped(Vec<Group>),
}

/// Ordered anchors plus the traversal that turns them into edges.
///
/// Produced once by a generator and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorSequence {
    points: Vec<Vec3>,
    traversal: Traversal,
}

impl AnchorSequence {
    /// Create a sequence, validating the traversal against the anchor count.
    pub fn new(points: Vec<Vec3>, traversal: Traversal) -> RibbonResult<Self> {
        if let Some(bad) = points.iter().find(|p| !p.iter().all(|c| c.is_finite())) {
            return Err(RibbonError::InvalidParameter(format!(
                "anchor ({}, {}, {}) is not finite",
                bad.x, bad.y, bad.z
            )));
        }
        match &traversal {
            Traversal::Sequential { .. } => {}
            Traversal::Skip { stride } => {
                if *stride == 0 {
                    return Err(RibbonError::InvalidParameter(
                        "skip stride must be at least 1".to_string(),
                    ));
                }
            }
            Traversal::Grouped(groups) => {
                for group in groups {
                    if group.start + group.len > points.len() {
                        return Err(RibbonError::InvalidParameter(format!(
                            "group {}..{} exceeds {} anchors",
                            group.start,
                            group.start + group.len,
                            points.len()
                        )));
                    }
                }
            }
        }
        Ok(Self { points, traversal })
    }

    /// Open polyline through `points`.
    pub fn open(points: Vec<Vec3>) -> RibbonResult<Self> {
        Self::new(points, Traversal::Sequential { closed: false })
    }

    /// Closed polygon through `points`.
    pub fn closed(points: Vec<Vec3>) -> RibbonResult<Self> {
        Self::new(points, Traversal::Sequential { closed: true })
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn traversal(&self) -> &Traversal {
        &self.traversal
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Anchor index pairs in drawing order.
    ///
    /// Fewer than two anchors yields no edges. Degenerate pairs are kept here;
    /// the animator decides what to skip.
    pub fn edge_indices(&self) -> Vec<(usize, usize)> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        match &self.traversal {
            Traversal::Sequential { closed } => chain(0, n, *closed),
            Traversal::Skip { stride } => (0..n).map(|i| (i, (i + stride) % n)).collect(),
            Traversal::Grouped(groups) => groups
                .iter()
                .flat_map(|g| chain(g.start, g.len, g.closed))
                .collect(),
        }
    }

    /// Edge endpoints in drawing order.
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edge_indices()
            .into_iter()
            .map(|(a, b)| (self.points[a], self.points[b]))
    }
}

/// Consecutive pairs over `start..start + len`, closing the loop if asked.
fn chain(start: usize, len: usize, closed: bool) -> Vec<(usize, usize)> {
    if len < 2 {
        return Vec::new();
    }
    let mut pairs: Vec<_> = (start..start + len - 1).map(|i| (i, i + 1)).collect();
    if closed {
        pairs.push((start + len - 1, start));
    }
    pairs
}
