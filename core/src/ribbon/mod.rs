//! Progressive "line being drawn" animation.
//!
//! Each edge of an [`AnchorSequence`](crate::shape::AnchorSequence) becomes a
//! thin quad whose far end grows from the edge start to the edge end over
//! several ticks. See [`RibbonAnimator`] for the per-tick contract.

mod animator;
mod segment;
mod settings;

pub use animator::{RibbonAnimator, Snapshots, Tick};
pub use segment::RibbonSegment;
pub use settings::{PostCompletion, Retention, RibbonSettings, Stepping};
