use kurbo::{BezPath, PathEl, Shape};

use crate::coords::Rect;

use super::{ArcCmd, PathCommands};

/// Arc-to-cubic tolerance for bounds.
const BOUNDS_TOLERANCE: f64 = 1e-7;

/// Bounds of everything `path` covers, including subpaths that only move.
fn covered(path: &BezPath) -> Option<kurbo::Rect> {
    let mut starts = path.elements().iter().filter_map(|el| match el {
        PathEl::MoveTo(p) => Some(*p),
        _ => None,
    });
    let first = starts.next()?;
    let mut bbox = starts.fold(kurbo::Rect::from_points(first, first), |r, p| r.union_pt(p));

    if path.segments().next().is_some() {
        bbox = bbox.union(path.bounding_box());
    }
    Some(bbox)
}

impl ArcCmd {
    /// Axis-aligned bounds of the swept arc.
    pub fn bounds(&self) -> Rect {
        let path: BezPath = self.to_kurbo().path_elements(BOUNDS_TOLERANCE).collect();
        match covered(&path) {
            Some(r) => r.into(),
            None => Rect::from_corners(self.start_point(), self.start_point()),
        }
    }
}

impl PathCommands {
    /// Axis-aligned bounds of everything the path draws, or `None` when it
    /// draws nothing.
    pub fn bounds(&self) -> Option<Rect> {
        covered(&self.to_bez_path(BOUNDS_TOLERANCE)).map(Rect::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::path::PathSink;
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    fn approx_rect(a: Rect, b: Rect) -> bool {
        (a.min() - b.min()).length() < 1e-6 && (a.max() - b.max()).length() < 1e-6
    }

    #[test]
    fn quarter_arc_bounds() {
        let arc = ArcCmd::new(Vec2::zero(), 10.0, 0.0, FRAC_PI_2, false);
        assert!(approx_rect(arc.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn arc_through_axis_extreme() {
        // From -45° to +45° passes through angle 0.
        let arc = ArcCmd::new(Vec2::zero(), 10.0, -PI / 4.0, PI / 4.0, false);
        let b = arc.bounds();
        assert!((b.max().x - 10.0).abs() < 1e-6);
        assert!((b.min().x - 10.0 * (PI / 4.0).cos()).abs() < 1e-6);
    }

    #[test]
    fn anticlockwise_arc_takes_long_way() {
        let arc = ArcCmd::new(Vec2::zero(), 10.0, 0.0, FRAC_PI_2, true);
        assert!(approx_rect(arc.bounds(), Rect::new(-10.0, -10.0, 20.0, 20.0)));
    }

    #[test]
    fn full_circle_bounds() {
        let arc = ArcCmd::new(Vec2::new(5.0, 5.0), 2.0, 0.3, 0.3 + TAU, false);
        assert!(approx_rect(arc.bounds(), Rect::new(3.0, 3.0, 4.0, 4.0)));
    }

    #[test]
    fn empty_path_has_no_bounds() {
        assert!(PathCommands::new().bounds().is_none());
    }

    #[test]
    fn lone_point_is_its_own_bounds() {
        let mut p = PathCommands::new();
        p.move_to(Vec2::new(7.0, -3.0));
        p.close_path();
        assert_eq!(p.bounds(), Some(Rect::new(7.0, -3.0, 0.0, 0.0)));
    }

    #[test]
    fn path_bounds_cover_lines_and_arcs() {
        let mut p = PathCommands::new();
        p.move_to(Vec2::zero());
        p.arc(Vec2::zero(), 10.0, 0.0, FRAC_PI_2, false);
        p.close_path();
        let b = p.bounds().unwrap();
        assert!(approx_rect(b, Rect::new(0.0, 0.0, 10.0, 10.0)));
    }
}
