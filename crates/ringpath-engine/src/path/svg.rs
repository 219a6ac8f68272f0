use kurbo::{PathEl, Point};

use super::PathCommands;

/// Finer precisions only grow the output.
const MAX_PRECISION: usize = 12;

/// Rounds to the grid `1 / scale`, writing `-0` as `0`.
fn snap(p: Point, scale: f64) -> Point {
    let round = |v: f64| (v * scale).round() / scale + 0.0;
    Point::new(round(p.x), round(p.y))
}

impl PathCommands {
    /// Serializes the path as SVG path data (the `d` attribute).
    ///
    /// Coordinates are rounded to `precision` fractional digits. Arcs are
    /// written as cubic Béziers accurate to half a unit in the last digit.
    pub fn to_svg_path_data(&self, precision: usize) -> String {
        let scale = 10f64.powi(precision.min(MAX_PRECISION) as i32);
        let mut path = self.to_bez_path(0.5 / scale);

        for el in path.elements_mut() {
            *el = match *el {
                PathEl::MoveTo(p) => PathEl::MoveTo(snap(p, scale)),
                PathEl::LineTo(p) => PathEl::LineTo(snap(p, scale)),
                PathEl::QuadTo(a, p) => PathEl::QuadTo(snap(a, scale), snap(p, scale)),
                PathEl::CurveTo(a, b, p) => {
                    PathEl::CurveTo(snap(a, scale), snap(b, scale), snap(p, scale))
                }
                PathEl::ClosePath => PathEl::ClosePath,
            };
        }

        path.to_svg()
    }
}
