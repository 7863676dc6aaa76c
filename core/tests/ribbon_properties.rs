//! Property tests for shape generation and ribbon animation.
//!
//! Parameterized with `rstest` over every stock shape and over the stepping
//! and retention combinations.

use rstest::rstest;

use muraltrace_core::math::{Vec3, point2};
use muraltrace_core::mesh::{CpuMeshSink, MeshBuffer};
use muraltrace_core::ribbon::RibbonSegment;
use muraltrace_core::shape::generators;
use muraltrace_core::{
    AnchorSequence, Retention, RibbonAnimator, RibbonError, RibbonSettings, Shape, Stepping, Tick,
};

const DT: f32 = 1.0 / 30.0;

fn stock(name: &str) -> Shape {
    Shape::by_name(name).expect("stock shape")
}

/// Run an animator to completion, checking buffer invariants every tick.
fn run_checked(animator: &mut RibbonAnimator, dt: f32) -> Vec<(Tick, MeshBuffer)> {
    let mut frames = Vec::new();
    loop {
        let tick = animator.tick(dt).unwrap();
        if tick == Tick::Finished {
            return frames;
        }
        let buffer = animator.buffer();
        assert_eq!(buffer.vertex_count() % 4, 0);
        assert_eq!(buffer.index_count() % 6, 0);
        assert!(buffer.is_consistent());
        frames.push((tick, buffer.clone()));
    }
}

// ---------------------------------------------------------------------------
// Vertex generator
// ---------------------------------------------------------------------------

#[rstest]
#[case::line("line")]
#[case::triangle("triangle")]
#[case::square("square")]
#[case::circle("circle")]
#[case::arc("arc")]
#[case::star("star")]
#[case::heart("heart")]
#[case::duck("duck")]
#[case::fish("fish")]
#[case::house("house")]
#[case::ship("ship")]
#[case::smiley("smiley")]
fn generators_are_deterministic(#[case] name: &str) {
    let shape = stock(name);
    let first = shape.anchors().unwrap();
    let second = shape.anchors().unwrap();
    assert_eq!(first, second);
    assert!(first.points().iter().all(|p| p.z == 0.0));
}

#[test]
fn circle_of_four_segments() {
    let anchors = generators::circle(Vec3::zeros(), 1.0, 4).unwrap();
    let expected = [
        point2(1.0, 0.0),
        point2(0.0, 1.0),
        point2(-1.0, 0.0),
        point2(0.0, -1.0),
        point2(1.0, 0.0),
    ];
    assert_eq!(anchors.len(), expected.len());
    for (actual, expected) in anchors.points().iter().zip(expected) {
        assert!((actual - expected).norm() < 1e-5);
    }

    let mut animator = RibbonAnimator::new(&anchors, RibbonSettings::new()).unwrap();
    assert_eq!(animator.edge_count(), 5);
    run_checked(&mut animator, 0.25);
    assert_eq!(animator.drawn_edges(), 5);
    assert_eq!(animator.skipped_edges(), 0);
}

#[test]
fn ten_point_star_skips_one() {
    let anchors = generators::star(2.0, 1.0, 10).unwrap();
    let expected: Vec<_> = (0..10).map(|i| (i, (i + 2) % 10)).collect();
    assert_eq!(anchors.edge_indices(), expected);
}

#[rstest]
#[case::segments(Shape::Circle { center: Vec3::zeros(), radius: 1.0, segments: 0 })]
#[case::star_points(Shape::Star { outer_radius: 2.0, inner_radius: 1.0, points: 0 })]
#[case::resolution(Shape::Heart { size: 1.0, curve_resolution: 0 })]
#[case::radius(Shape::Circle { center: Vec3::zeros(), radius: f32::NAN, segments: 8 })]
#[case::size(Shape::House { size: f32::INFINITY })]
fn invalid_shape_parameters(#[case] shape: Shape) {
    assert!(matches!(
        shape.anchors(),
        Err(RibbonError::InvalidParameter(_))
    ));
}

#[test]
fn negative_speed_is_invalid() {
    let anchors = stock("line").anchors().unwrap();
    let result = RibbonAnimator::new(&anchors, RibbonSettings::new().with_speed(-1.0));
    assert!(matches!(result, Err(RibbonError::InvalidParameter(_))));
}

// ---------------------------------------------------------------------------
// Animation invariants
// ---------------------------------------------------------------------------

#[rstest]
fn buffer_invariants_hold_every_tick(
    #[values("triangle", "star", "heart", "duck", "fish", "ship", "smiley")] name: &str,
    #[values(Stepping::Lerp, Stepping::MoveTowards)] stepping: Stepping,
    #[values(Retention::Accumulating, Retention::Transient)] retention: Retention,
) {
    let anchors = stock(name).anchors().unwrap();
    let settings = RibbonSettings::new()
        .with_speed(if stepping == Stepping::Lerp { 10.0 } else { 0.01 })
        .with_stepping(stepping)
        .with_retention(retention);
    let mut animator = RibbonAnimator::new(&anchors, settings).unwrap();
    let frames = run_checked(&mut animator, DT);

    assert!(!frames.is_empty());
    assert_eq!(
        animator.drawn_edges() + animator.skipped_edges(),
        animator.edge_count()
    );

    match retention {
        Retention::Accumulating => {
            for pair in frames.windows(2) {
                assert!(pair[1].1.vertex_count() >= pair[0].1.vertex_count());
            }
        }
        Retention::Transient => {
            for (_, buffer) in &frames {
                assert_eq!(buffer.vertex_count(), 4);
                assert_eq!(buffer.index_count(), 6);
            }
        }
    }
}

#[rstest]
#[case::lerp(Stepping::Lerp, 4.0)]
#[case::move_towards(Stepping::MoveTowards, 0.05)]
fn every_edge_ends_exactly_on_its_end_point(#[case] stepping: Stepping, #[case] speed: f32) {
    let anchors = stock("house").anchors().unwrap();
    let settings = RibbonSettings::new()
        .with_thickness(0.1)
        .with_speed(speed)
        .with_stepping(stepping)
        .with_retention(Retention::Transient);
    let mut animator = RibbonAnimator::new(&anchors, settings).unwrap();
    let edges: Vec<_> = anchors.edges().collect();

    loop {
        let before = animator.current_segment().cloned();
        let tick = animator.tick(DT).unwrap();
        let Tick::Drawn { edge } = tick else { break };
        if animator.current_edge().is_none() {
            // The segment finished on this tick
            let (start, end) = edges[edge];
            let perpendicular = RibbonSegment::new(start, end, settings.half_width())
                .expect("house edges have a direction")
                .perpendicular();
            if let Some(segment) = before {
                assert_eq!(segment.perpendicular(), perpendicular);
            }
            let quad = animator.buffer().vertices();
            assert_eq!(quad[2], end - perpendicular);
            assert_eq!(quad[3], end + perpendicular);
        }
    }
}

#[test]
fn single_edge_lerp_reaches_end_after_ten_ticks() {
    let anchors = AnchorSequence::open(vec![point2(0.0, 0.0), point2(2.0, 1.0)]).unwrap();
    let settings = RibbonSettings::new().with_thickness(0.1).with_speed(1.0);
    let mut animator = RibbonAnimator::new(&anchors, settings).unwrap();

    for _ in 0..9 {
        animator.tick(0.1).unwrap();
        let segment = animator.current_segment().unwrap();
        assert!(segment.progress() < 1.0);
    }
    assert_eq!(animator.tick(0.1).unwrap(), Tick::Drawn { edge: 0 });
    assert_eq!(animator.current_edge(), None);
    assert_eq!(animator.ticks(), 10);
    assert_eq!(animator.tick(0.1).unwrap(), Tick::Finished);
}

#[test]
fn duplicate_anchors_emit_no_segment() {
    let anchors = generators::heart(1.0, 4).unwrap();
    let mut animator = RibbonAnimator::new(&anchors, RibbonSettings::new().with_speed(5.0))
        .unwrap();
    let frames = run_checked(&mut animator, 0.1);

    // The lobes meet on a shared anchor: edge 4 goes nowhere
    assert!(frames.iter().all(|(tick, _)| *tick != Tick::Drawn { edge: 4 }));
    assert_eq!(animator.skipped_edges(), 1);
    assert_eq!(animator.drawn_edges(), animator.edge_count() - 1);
}

#[test]
fn zero_size_shape_collapses_without_error() {
    let anchors = generators::fish(0.0).unwrap();
    let mut animator = RibbonAnimator::new(&anchors, RibbonSettings::new()).unwrap();
    assert_eq!(animator.tick(DT).unwrap(), Tick::Finished);
    assert_eq!(animator.skipped_edges(), animator.edge_count());
    assert!(animator.buffer().is_empty());
}

#[test]
fn independent_animators_do_not_interfere() {
    let star = stock("star").anchors().unwrap();
    let circle = stock("circle").anchors().unwrap();
    let settings = RibbonSettings::new().with_speed(20.0);

    let mut a = RibbonAnimator::new(&star, settings).unwrap();
    let mut b = RibbonAnimator::new(&circle, settings).unwrap();
    let mut solo = RibbonAnimator::new(&star, settings).unwrap();
    let (mut sink_a, mut sink_b, mut sink_solo) =
        (CpuMeshSink::new(), CpuMeshSink::new(), CpuMeshSink::new());

    while !(a.is_finished() && b.is_finished()) {
        a.drive(&mut sink_a, DT).unwrap();
        b.drive(&mut sink_b, DT).unwrap();
        solo.drive(&mut sink_solo, DT).unwrap();
    }

    assert_eq!(a.buffer(), solo.buffer());
    assert_eq!(sink_a.positions(), sink_solo.positions());
    assert!(sink_b.push_count() > sink_a.push_count());
}
