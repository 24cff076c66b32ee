use crate::shape::{Point, Shape};

/// A release closer than this to the target snaps into place.
pub const SNAP_THRESHOLD: f64 = 30.0;
/// Points granted per correct placement in scored levels.
pub const PLACEMENT_AWARD: u32 = 10;

/// Per-level rules. The two shipped variants differ only here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Snapped shapes stop responding to pointer-down.
    pub lock_placed: bool,
    /// Score added on each successful placement.
    pub award: u32,
}

impl Rules {
    /// Free-play: shapes snap but stay draggable, nothing is counted.
    pub fn practice() -> Self {
        Rules {
            lock_placed: false,
            award: 0,
        }
    }

    /// Placement locks the shape and awards points.
    pub fn scored() -> Self {
        Rules {
            lock_placed: true,
            award: PLACEMENT_AWARD,
        }
    }
}

/// Result of a pointer-up, so the caller knows whether to play the
/// success cue and refresh the score display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// No drag was in progress.
    Idle,
    /// Released too far from the target; the shape stays put.
    Missed,
    /// Snapped onto the target.
    Placed,
}

/// The one shape currently held by the pointer, with the grab offset so
/// the shape does not jump to re-center under the cursor.
#[derive(Clone, Copy, Debug)]
struct DragState {
    idx: usize,
    offset: Point,
}

/// Owns the shape list, score and drag state for one play session.
pub struct Session {
    shapes: Vec<Shape>,
    initial: Vec<Shape>,
    rules: Rules,
    score: u32,
    drag: Option<DragState>,
}

impl Session {
    pub fn new(shapes: Vec<Shape>, rules: Rules) -> Self {
        Session {
            initial: shapes.clone(),
            shapes,
            rules,
            score: 0,
            drag: None,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Try to start a drag at `at`. Shapes are tested front-to-back and
    /// the first hit wins; locked shapes are skipped. Returns whether a
    /// drag began.
    pub fn pointer_down(&mut self, at: Point) -> bool {
        if self.drag.is_some() {
            return false;
        }
        for (idx, shape) in self.shapes.iter_mut().enumerate() {
            if self.rules.lock_placed && shape.placed {
                continue;
            }
            if shape.contains(at) {
                shape.dragging = true;
                self.drag = Some(DragState {
                    idx,
                    offset: Point {
                        x: at.x - shape.position.x,
                        y: at.y - shape.position.y,
                    },
                });
                return true;
            }
        }
        false
    }

    /// Move the held shape so it keeps tracking the pointer minus the
    /// grab offset. Returns whether anything moved (i.e. redraw needed).
    pub fn pointer_move(&mut self, at: Point) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let shape = &mut self.shapes[drag.idx];
        shape.position = Point {
            x: at.x - drag.offset.x,
            y: at.y - drag.offset.y,
        };
        true
    }

    /// End the drag and evaluate placement: inside the snap threshold the
    /// shape lands exactly on its target, locks (when the rules say so)
    /// and scores; otherwise it stays where it was dropped.
    pub fn pointer_up(&mut self) -> PlaceOutcome {
        let Some(drag) = self.drag.take() else {
            return PlaceOutcome::Idle;
        };
        let shape = &mut self.shapes[drag.idx];
        shape.dragging = false;
        if shape.target_distance() < SNAP_THRESHOLD {
            shape.position = shape.target;
            if self.rules.lock_placed {
                shape.placed = true;
            }
            self.score += self.rules.award;
            PlaceOutcome::Placed
        } else {
            PlaceOutcome::Missed
        }
    }

    /// Put every shape back at its startup position and unlock it. The
    /// score is untouched.
    pub fn reset_shapes(&mut self) {
        self.shapes = self.initial.clone();
        self.drag = None;
    }

    /// Zero the score, then reset the shapes.
    pub fn clear_score(&mut self) {
        self.score = 0;
        self.reset_shapes();
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
