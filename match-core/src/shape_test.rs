use super::*;

fn at(x: f64, y: f64) -> Point {
    Point { x, y }
}

fn circle(radius: f64) -> Shape {
    Shape::new(
        ShapeKind::Circle { radius },
        at(100.0, 100.0),
        at(600.0, 100.0),
        "red".to_string(),
    )
}

#[test]
fn point_distance_is_euclidean() {
    assert_eq!(at(0.0, 0.0).distance(at(3.0, 4.0)), 5.0);
    assert_eq!(at(605.0, 98.0).distance(at(600.0, 100.0)), 29.0_f64.sqrt());
}

#[test]
fn circle_hit_is_strictly_inside_radius() {
    let c = circle(40.0);
    assert!(c.contains(at(100.0, 100.0)));
    assert!(c.contains(at(139.9, 100.0)));
    // Exactly on the rim counts as a miss.
    assert!(!c.contains(at(140.0, 100.0)));
    assert!(!c.contains(at(100.0, 140.0)));
}

#[test]
fn square_hit_is_strictly_inside_box() {
    let s = Shape::new(
        ShapeKind::Square { side: 70.0 },
        at(100.0, 250.0),
        at(580.0, 300.0),
        "blue".to_string(),
    );
    assert!(s.contains(at(100.0, 250.0)));
    assert!(s.contains(at(134.9, 284.9)));
    // Exactly on an edge counts as a miss.
    assert!(!s.contains(at(135.0, 250.0)));
    assert!(!s.contains(at(100.0, 215.0)));
    assert!(!s.contains(at(65.0, 250.0)));
}

#[test]
fn triangle_hit_uses_bounding_circle() {
    let t = Shape::new(
        ShapeKind::Triangle { bound: 45.0 },
        at(100.0, 400.0),
        at(590.0, 420.0),
        "green".to_string(),
    );
    // A corner of the bounding box is outside the real triangle but
    // inside the bounding circle; the approximation accepts it.
    assert!(t.contains(at(130.0, 430.0)));
    assert!(!t.contains(at(145.0, 400.0)));
}

#[test]
fn new_shape_starts_at_start_unplaced() {
    let c = circle(40.0);
    assert_eq!(c.position, c.start);
    assert!(!c.dragging);
    assert!(!c.placed);
    assert_eq!(c.target_distance(), 500.0);
}
