/// Basic two dimensional point in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

impl Point {
    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Shape variant, each carrying only the extent it needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    /// Radius in px.
    Circle { radius: f64 },
    /// Side length in px; drawn axis-aligned, centered on the position.
    Square { side: f64 },
    /// Bounding-circle radius in px. Hit-testing uses the bounding
    /// circle, not the actual polygon (intentional approximation).
    Triangle { bound: f64 },
}

/// One draggable piece together with its target outline.
#[derive(Clone, Debug)]
pub struct Shape {
    pub kind: ShapeKind,
    /// Current position, mutated while dragging.
    pub position: Point,
    /// Startup position, kept for reset.
    pub start: Point,
    /// Correct placement spot.
    pub target: Point,
    /// CSS fill color.
    pub color: String,
    pub dragging: bool,
    pub placed: bool,
}

impl Shape {
    pub fn new(kind: ShapeKind, start: Point, target: Point, color: String) -> Self {
        Shape {
            kind,
            position: start,
            start,
            target,
            color,
            dragging: false,
            placed: false,
        }
    }

    /// Whether `at` falls inside the shape's hit region. Boundaries are
    /// exclusive: a pointer exactly on the edge is a miss.
    pub fn contains(&self, at: Point) -> bool {
        match self.kind {
            ShapeKind::Circle { radius } => at.distance(self.position) < radius,
            ShapeKind::Square { side } => {
                let half = side / 2.0;
                at.x > self.position.x - half
                    && at.x < self.position.x + half
                    && at.y > self.position.y - half
                    && at.y < self.position.y + half
            }
            ShapeKind::Triangle { bound } => at.distance(self.position) < bound,
        }
    }

    /// Distance from the current position to the target spot.
    pub fn target_distance(&self) -> f64 {
        self.position.distance(self.target)
    }
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod tests;
