use match_core::{Point, Rules, Session, Shape, ShapeKind};
use serde::{Deserialize, Serialize};

/// One shape entry in a level document. The extent field depends on the
/// type: `r` for circles, `size` for squares, `bound` for triangles.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ShapeSpec {
    #[serde(rename = "type")]
    pub type_: String,
    /// Starting position.
    pub at: Option<[f64; 2]>,
    /// Correct placement spot.
    pub target: Option<[f64; 2]>,
    pub r: Option<f64>,
    pub size: Option<f64>,
    pub bound: Option<f64>,
    pub color: Option<String>,
}

/// Full level document describing one game variant.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LevelSpec {
    pub name: Option<String>,
    /// Placements lock and score when true.
    pub scoring: Option<bool>,
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

/// Build a playable session from a level document. Entries with an
/// unrecognized type are skipped.
pub fn build_session(spec: &LevelSpec) -> Session {
    let mut shapes = Vec::new();
    for (i, sp) in spec.shapes.iter().enumerate() {
        let Some(kind) = shape_kind(sp) else {
            continue;
        };
        let at = sp.at.unwrap_or([0.0, 0.0]);
        let target = sp.target.unwrap_or(at);
        let color = sp
            .color
            .clone()
            .unwrap_or_else(|| match_core::shape_color(i));
        shapes.push(Shape::new(
            kind,
            Point::from((at[0], at[1])),
            Point::from((target[0], target[1])),
            color,
        ));
    }
    let rules = if spec.scoring.unwrap_or(false) {
        Rules::scored()
    } else {
        Rules::practice()
    };
    Session::new(shapes, rules)
}

fn shape_kind(sp: &ShapeSpec) -> Option<ShapeKind> {
    match sp.type_.as_str() {
        "circle" => Some(ShapeKind::Circle {
            radius: sp.r.unwrap_or(40.0),
        }),
        "square" => Some(ShapeKind::Square {
            side: sp.size.unwrap_or(70.0),
        }),
        "triangle" => Some(ShapeKind::Triangle {
            bound: sp.bound.unwrap_or(45.0),
        }),
        _ => None,
    }
}
