use super::*;
use crate::shape::ShapeKind;

fn at(x: f64, y: f64) -> Point {
    Point { x, y }
}

/// The scored level from the shipped configuration: circle at (120,100)
/// radius 40 with its target at (600,100), plus a square and triangle.
fn scored_session() -> Session {
    let shapes = vec![
        Shape::new(
            ShapeKind::Circle { radius: 40.0 },
            at(120.0, 100.0),
            at(600.0, 100.0),
            "red".to_string(),
        ),
        Shape::new(
            ShapeKind::Square { side: 70.0 },
            at(120.0, 250.0),
            at(580.0, 300.0),
            "blue".to_string(),
        ),
        Shape::new(
            ShapeKind::Triangle { bound: 45.0 },
            at(120.0, 400.0),
            at(590.0, 420.0),
            "green".to_string(),
        ),
    ];
    Session::new(shapes, Rules::scored())
}

#[test]
fn release_near_target_snaps_locks_and_scores() {
    let mut s = scored_session();
    assert!(s.pointer_down(at(120.0, 100.0)));
    assert!(s.shapes()[0].dragging);
    assert!(s.pointer_move(at(605.0, 98.0)));
    assert_eq!(s.shapes()[0].position, at(605.0, 98.0));
    // distance to (600,100) is ~5.4, well under the threshold
    assert_eq!(s.pointer_up(), PlaceOutcome::Placed);
    assert_eq!(s.shapes()[0].position, at(600.0, 100.0));
    assert!(s.shapes()[0].placed);
    assert!(!s.shapes()[0].dragging);
    assert_eq!(s.score(), 10);
}

#[test]
fn release_far_from_target_leaves_shape_where_dropped() {
    let mut s = scored_session();
    assert!(s.pointer_down(at(120.0, 100.0)));
    s.pointer_move(at(400.0, 400.0));
    assert_eq!(s.pointer_up(), PlaceOutcome::Missed);
    assert_eq!(s.shapes()[0].position, at(400.0, 400.0));
    assert!(!s.shapes()[0].placed);
    assert_eq!(s.score(), 0);
}

#[test]
fn release_exactly_at_threshold_is_a_miss() {
    let mut s = scored_session();
    assert!(s.pointer_down(at(120.0, 100.0)));
    // exactly 30.0 from the target: strictly-less comparison must reject
    s.pointer_move(at(630.0, 100.0));
    assert_eq!(s.pointer_up(), PlaceOutcome::Missed);
    assert_eq!(s.shapes()[0].position, at(630.0, 100.0));
    assert_eq!(s.score(), 0);
}

#[test]
fn grab_offset_prevents_recentering_jump() {
    let mut s = scored_session();
    // grab the circle 10px right and below its center
    assert!(s.pointer_down(at(130.0, 110.0)));
    s.pointer_move(at(300.0, 300.0));
    assert_eq!(s.shapes()[0].position, at(290.0, 290.0));
}

#[test]
fn placed_shape_ignores_pointer_down() {
    let mut s = scored_session();
    s.pointer_down(at(120.0, 100.0));
    s.pointer_move(at(600.0, 100.0));
    s.pointer_up();
    assert!(s.shapes()[0].placed);
    // former location is empty, target location is locked
    assert!(!s.pointer_down(at(600.0, 100.0)));
    assert!(!s.pointer_down(at(120.0, 100.0)));
    assert_eq!(s.score(), 10);
}

#[test]
fn only_one_shape_drags_at_a_time() {
    let mut s = scored_session();
    assert!(s.pointer_down(at(120.0, 100.0)));
    // second press over another shape while a drag is live is ignored
    assert!(!s.pointer_down(at(120.0, 250.0)));
    assert_eq!(
        s.shapes().iter().filter(|sh| sh.dragging).count(),
        1
    );
}

#[test]
fn overlapping_shapes_first_in_order_wins() {
    let shapes = vec![
        Shape::new(
            ShapeKind::Circle { radius: 40.0 },
            at(100.0, 100.0),
            at(600.0, 100.0),
            "red".to_string(),
        ),
        Shape::new(
            ShapeKind::Square { side: 80.0 },
            at(110.0, 100.0),
            at(580.0, 300.0),
            "blue".to_string(),
        ),
    ];
    let mut s = Session::new(shapes, Rules::scored());
    assert!(s.pointer_down(at(110.0, 100.0)));
    assert!(s.shapes()[0].dragging);
    assert!(!s.shapes()[1].dragging);
}

#[test]
fn pointer_events_without_a_drag_are_no_ops() {
    let mut s = scored_session();
    assert!(!s.pointer_move(at(300.0, 300.0)));
    assert_eq!(s.pointer_up(), PlaceOutcome::Idle);
    assert_eq!(s.shapes()[0].position, at(120.0, 100.0));
}

#[test]
fn practice_rules_snap_without_locking_or_scoring() {
    let shapes = vec![Shape::new(
        ShapeKind::Circle { radius: 40.0 },
        at(100.0, 100.0),
        at(600.0, 120.0),
        "red".to_string(),
    )];
    let mut s = Session::new(shapes, Rules::practice());
    s.pointer_down(at(100.0, 100.0));
    s.pointer_move(at(595.0, 118.0));
    assert_eq!(s.pointer_up(), PlaceOutcome::Placed);
    assert_eq!(s.shapes()[0].position, at(600.0, 120.0));
    assert!(!s.shapes()[0].placed);
    assert_eq!(s.score(), 0);
    // snapped shape is still draggable in practice mode
    assert!(s.pointer_down(at(600.0, 120.0)));
}

#[test]
fn reset_restores_shapes_and_keeps_score() {
    let mut s = scored_session();
    s.pointer_down(at(120.0, 100.0));
    s.pointer_move(at(600.0, 100.0));
    s.pointer_up();
    s.pointer_down(at(120.0, 250.0));
    s.pointer_move(at(400.0, 400.0));
    s.pointer_up();
    assert_eq!(s.score(), 10);

    s.reset_shapes();
    assert_eq!(s.score(), 10);
    assert_eq!(s.shapes()[0].position, at(120.0, 100.0));
    assert_eq!(s.shapes()[1].position, at(120.0, 250.0));
    assert!(s.shapes().iter().all(|sh| !sh.placed && !sh.dragging));
    // unlocked again after reset
    assert!(s.pointer_down(at(120.0, 100.0)));
}

#[test]
fn clear_score_zeroes_score_and_resets_shapes() {
    let mut s = scored_session();
    s.pointer_down(at(120.0, 100.0));
    s.pointer_move(at(600.0, 100.0));
    s.pointer_up();
    assert_eq!(s.score(), 10);

    s.clear_score();
    assert_eq!(s.score(), 0);
    assert_eq!(s.shapes()[0].position, at(120.0, 100.0));
    assert!(!s.shapes()[0].placed);
}

#[test]
fn reset_mid_drag_drops_the_drag() {
    let mut s = scored_session();
    s.pointer_down(at(120.0, 100.0));
    s.pointer_move(at(300.0, 300.0));
    s.reset_shapes();
    assert_eq!(s.pointer_up(), PlaceOutcome::Idle);
    assert_eq!(s.shapes()[0].position, at(120.0, 100.0));
}
