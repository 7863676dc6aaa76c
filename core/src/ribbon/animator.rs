//! The frame-driven ribbon animator.

use crate::error::{RibbonError, RibbonResult, ensure_finite, ensure_positive};
use crate::math::Vec3;
use crate::mesh::{MeshBuffer, MeshSink};
use crate::shape::AnchorSequence;

use super::segment::RibbonSegment;
use super::settings::{PostCompletion, Retention, RibbonSettings};

/// Result of a single [`RibbonAnimator::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A quad for the given edge (index in traversal order) was written.
    Drawn { edge: usize },
    /// All edges are drawn; waiting out the clear delay.
    Holding,
    /// The clear delay elapsed and the buffer was emptied.
    Cleared,
    /// Nothing left to do. Every later tick returns this too.
    Finished,
}

impl Tick {
    /// Whether the buffer changed and should be pushed to the sink.
    pub fn changed_mesh(&self) -> bool {
        matches!(self, Self::Drawn { .. } | Self::Cleared)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Drawing,
    Holding { elapsed: f32 },
    Finished,
}

#[derive(Debug, Clone)]
struct ActiveEdge {
    index: usize,
    segment: RibbonSegment,
}

/// Reveals an anchor sequence edge by edge as growing ribbon quads.
///
/// The animator is a resumable process: the host calls [`tick`](Self::tick)
/// (or [`drive`](Self::drive)) once per displayed frame. It exclusively owns
/// its [`MeshBuffer`] and only hands out borrowed views or clones. A finished
/// animator cannot be restarted; build a new one to replay.
///
/// # Example
///
/// ```ignore
/// let anchors = Shape::by_name("star").unwrap().anchors()?;
/// let mut animator = RibbonAnimator::new(&anchors, RibbonSettings::new())?;
/// let mut sink = CpuMeshSink::new();
/// while animator.drive(&mut sink, 1.0 / 60.0)? != Tick::Finished {}
/// ```
#[derive(Debug, Clone)]
pub struct RibbonAnimator {
    settings: RibbonSettings,
    edges: Vec<(Vec3, Vec3)>,
    next_edge: usize,
    active: Option<ActiveEdge>,
    buffer: MeshBuffer,
    phase: Phase,
    ticks: u64,
    drawn_edges: usize,
    skipped_edges: usize,
}

impl RibbonAnimator {
    /// Create an animator over `anchors`.
    ///
    /// Settings are validated here, before any tick. An anchor sequence
    /// with fewer than two points produces an animator with no edges.
    pub fn new(anchors: &AnchorSequence, settings: RibbonSettings) -> RibbonResult<Self> {
        settings.validate()?;
        let edges: Vec<_> = anchors.edges().collect();
        log::debug!(
            "Ribbon animator over {} anchors, {} edges ({:?}, {:?})",
            anchors.len(),
            edges.len(),
            settings.stepping,
            settings.retention
        );
        Ok(Self {
            settings,
            edges,
            next_edge: 0,
            active: None,
            buffer: MeshBuffer::new(),
            phase: Phase::Drawing,
            ticks: 0,
            drawn_edges: 0,
            skipped_edges: 0,
        })
    }

    /// Advance the animation by one tick of `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> RibbonResult<Tick> {
        ensure_finite("tick delta", dt)?;
        if dt < 0.0 {
            return Err(RibbonError::InvalidParameter(format!(
                "tick delta must not be negative, got {dt}"
            )));
        }

        loop {
            match self.phase {
                Phase::Drawing => {
                    if self.active.is_none() {
                        self.active = self.next_segment();
                    }
                    let Some(active) = self.active.as_mut() else {
                        self.phase = match self.settings.post_completion {
                            PostCompletion::None => Phase::Finished,
                            PostCompletion::ClearAfter(_) => Phase::Holding { elapsed: 0.0 },
                        };
                        log::debug!(
                            "Ribbon drawn: {} edges in {} ticks, {} skipped",
                            self.drawn_edges,
                            self.ticks,
                            self.skipped_edges
                        );
                        continue;
                    };

                    let done = active.segment.advance(
                        self.settings.stepping,
                        self.settings.speed,
                        dt,
                    );
                    let corners = active.segment.corners();
                    let edge = active.index;

                    match self.settings.retention {
                        Retention::Accumulating => self.buffer.push_quad(corners),
                        Retention::Transient => self.buffer.replace_with_quad(corners),
                    }
                    if done {
                        self.active = None;
                        self.drawn_edges += 1;
                    }
                    self.ticks += 1;
                    log::trace!("Edge {edge} tick, {} vertices", self.buffer.vertex_count());
                    return Ok(Tick::Drawn { edge });
                }
                Phase::Holding { elapsed } => {
                    let delay = match self.settings.post_completion {
                        PostCompletion::ClearAfter(seconds) => seconds,
                        PostCompletion::None => 0.0,
                    };
                    let elapsed = elapsed + dt;
                    self.ticks += 1;
                    if elapsed >= delay {
                        self.buffer.clear();
                        self.phase = Phase::Finished;
                        log::debug!("Ribbon cleared after {elapsed:.3}s hold");
                        return Ok(Tick::Cleared);
                    }
                    self.phase = Phase::Holding { elapsed };
                    return Ok(Tick::Holding);
                }
                Phase::Finished => return Ok(Tick::Finished),
            }
        }
    }

    /// Tick, then push the buffer to `sink` if it changed.
    ///
    /// A failing sink is fatal: the animator finishes and the error is
    /// returned as [`RibbonError::SinkUnavailable`].
    pub fn drive<S: MeshSink + ?Sized>(&mut self, sink: &mut S, dt: f32) -> RibbonResult<Tick> {
        let tick = self.tick(dt)?;
        if tick.changed_mesh()
            && let Err(err) = sink.replace(self.buffer.vertices(), self.buffer.indices())
        {
            log::error!("Mesh sink rejected ribbon update: {err}");
            self.cancel();
            return Err(err.into());
        }
        Ok(tick)
    }

    /// Lazy sequence of buffer snapshots, one per tick that changes the mesh.
    ///
    /// Consumes the animator. `dt` must be positive so the sequence is finite.
    pub fn snapshots(self, dt: f32) -> RibbonResult<Snapshots> {
        ensure_positive("tick delta", dt)?;
        Ok(Snapshots { animator: self, dt })
    }

    /// Stop immediately. The buffer keeps its last consistent contents.
    pub fn cancel(&mut self) {
        self.active = None;
        self.phase = Phase::Finished;
    }

    /// Current mesh contents.
    pub fn buffer(&self) -> &MeshBuffer {
        &self.buffer
    }

    pub fn settings(&self) -> &RibbonSettings {
        &self.settings
    }

    /// Number of edges in traversal order, degenerate ones included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge currently being drawn, if any.
    pub fn current_edge(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.index)
    }

    /// In-progress segment, if any.
    pub fn current_segment(&self) -> Option<&RibbonSegment> {
        self.active.as_ref().map(|a| &a.segment)
    }

    /// Edges fully drawn so far.
    pub fn drawn_edges(&self) -> usize {
        self.drawn_edges
    }

    /// Zero-length edges skipped so far.
    pub fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }

    /// Ticks consumed so far, excluding ticks after finishing.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Start the next edge that has a direction, skipping degenerate ones.
    fn next_segment(&mut self) -> Option<ActiveEdge> {
        while self.next_edge < self.edges.len() {
            let index = self.next_edge;
            self.next_edge += 1;
            let (start, end) = self.edges[index];
            match RibbonSegment::new(start, end, self.settings.half_width()) {
                Some(segment) => {
                    log::debug!("Drawing edge {index}: {start:?} -> {end:?}");
                    return Some(ActiveEdge { index, segment });
                }
                None => {
                    log::debug!("Skipping degenerate edge {index} at {start:?}");
                    self.skipped_edges += 1;
                }
            }
        }
        None
    }
}

/// Iterator returned by [`RibbonAnimator::snapshots`].
#[derive(Debug, Clone)]
pub struct Snapshots {
    animator: RibbonAnimator,
    dt: f32,
}

impl Snapshots {
    /// The underlying animator.
    pub fn animator(&self) -> &RibbonAnimator {
        &self.animator
    }
}

impl Iterator for Snapshots {
    type Item = MeshBuffer;

    fn next(&mut self) -> Option<MeshBuffer> {
        loop {
            match self.animator.tick(self.dt) {
                Ok(tick) if tick.changed_mesh() => return Some(self.animator.buffer.clone()),
                Ok(Tick::Holding) => continue,
                Ok(_) | Err(_) => return None,
            }
        }
    }
}
