//! Pure game logic for the shape-matching game: shapes, hit-testing,
//! the single-pointer drag state machine and placement scoring.
//!
//! Nothing in this crate touches the DOM or canvas; the wasm runtime
//! drives a [`Session`] from browser events and renders the result.

pub mod session;
pub mod shape;

pub use session::{PlaceOutcome, Rules, Session, PLACEMENT_AWARD, SNAP_THRESHOLD};
pub use shape::{Point, Shape, ShapeKind};

/// Fallback fill color for shape index `i` when a level omits one.
/// Colors are stable and cycle by index.
pub fn shape_color(i: usize) -> String {
    const PALETTE: [&str; 8] = [
        "red",
        "blue",
        "green",
        "orange",
        "purple",
        "teal",
        "hotpink",
        "gold",
    ];
    PALETTE[i % PALETTE.len()].to_string()
}
