use bytemuck::{Pod, Zeroable};
use kurbo::{BezPath, PathEl, Shape};

use crate::coords::Vec2;

use super::bez::MIN_TOLERANCE;
use super::PathCommands;

/// Flattening options.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlattenOptions {
    /// Maximum distance between an arc and its chords.
    pub tolerance: f64,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self { tolerance: 0.25 }
    }
}

/// GPU-ready polyline vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
}

/// One flattened subpath.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Vec2>,
    /// True when the subpath ended with `ClosePath`.
    pub closed: bool,
}

impl Polyline {
    /// Points narrowed to `f32` for vertex buffers.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.points
            .iter()
            .map(|p| Vertex { pos: [p.x as f32, p.y as f32] })
            .collect()
    }

    /// Area of the polygon the points enclose, treating the polyline as
    /// closed.
    ///
    /// Positive when the points run towards increasing angles.
    pub fn signed_area(&self) -> f64 {
        let Some((first, rest)) = self.points.split_first() else {
            return 0.0;
        };
        let mut polygon = BezPath::new();
        polygon.move_to(*first);
        for &p in rest {
            polygon.line_to(p);
        }
        polygon.close_path();
        polygon.area()
    }
}

impl PathCommands {
    /// Converts the path into polylines, one per subpath.
    pub fn flatten(&self, options: &FlattenOptions) -> Vec<Polyline> {
        // Half the budget for arc -> cubic, half for cubic -> lines.
        let half = (options.tolerance / 2.0).max(MIN_TOLERANCE);
        let path = self.to_bez_path(half);

        let mut out = Vec::new();
        let mut current: Option<Polyline> = None;

        kurbo::flatten(path.elements().iter().copied(), half, |el| match el {
            PathEl::MoveTo(p) => {
                if let Some(done) = current.take() {
                    out.push(done);
                }
                current = Some(Polyline { points: vec![p.into()], closed: false });
            }
            PathEl::LineTo(p) => {
                if let Some(line) = current.as_mut() {
                    line.points.push(p.into());
                }
            }
            PathEl::ClosePath => {
                if let Some(mut done) = current.take() {
                    done.closed = true;
                    out.push(done);
                }
            }
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        });

        if let Some(done) = current {
            out.push(done);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSink;
    use core::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn arc_chords_respect_tolerance() {
        let mut p = PathCommands::new();
        p.arc(Vec2::zero(), 100.0, 0.0, FRAC_PI_2, false);

        let tol = 0.1;
        let lines = p.flatten(&FlattenOptions { tolerance: tol });
        assert_eq!(lines.len(), 1);
        let pts = &lines[0].points;
        assert!(pts.len() > 2);
        for w in pts.windows(2) {
            let mid = w[0].midpoint(w[1]);
            assert!((100.0 - mid.length()).abs() <= tol);
        }
        assert!((pts[pts.len() - 1] - Vec2::new(0.0, 100.0)).length() < 1e-9);
    }

    #[test]
    fn closed_subpaths_are_marked() {
        let mut p = PathCommands::new();
        p.move_to(Vec2::zero());
        p.line_to(Vec2::new(1.0, 0.0));
        p.line_to(Vec2::new(0.0, 1.0));
        p.close_path();
        p.move_to(Vec2::new(5.0, 5.0));
        p.line_to(Vec2::new(6.0, 5.0));

        let lines = p.flatten(&FlattenOptions::default());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].closed);
        assert!(!lines[1].closed);
        assert!((lines[0].signed_area() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn circle_area_converges() {
        let mut p = PathCommands::new();
        p.arc(Vec2::zero(), 10.0, 0.0, TAU, false);
        p.close_path();
        let lines = p.flatten(&FlattenOptions { tolerance: 0.001 });
        let area = lines[0].signed_area();
        assert!((area - core::f64::consts::PI * 100.0).abs() < 0.5);
    }

    #[test]
    fn vertices_are_tightly_packed() {
        let line = Polyline { points: vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)], closed: false };
        let verts = line.vertices();
        assert_eq!(verts[1].pos, [3.0, 4.0]);
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 16);
    }
}
