use kurbo::BezPath;

use super::walk::{walk, Event};
use super::PathCommands;

/// Floor for arc and flattening tolerances.
pub(super) const MIN_TOLERANCE: f64 = 1e-9;

impl PathCommands {
    /// Converts the recording into a `kurbo::BezPath`.
    ///
    /// Canvas joins become explicit `LineTo`s and every arc becomes cubic
    /// Béziers within `tolerance` of the true circle.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let tolerance = tolerance.max(MIN_TOLERANCE);
        let mut path = BezPath::new();

        walk(self.commands(), |ev| match ev {
            Event::Begin(p) => path.move_to(p),
            Event::Line(p) => path.line_to(p),
            Event::Arc(arc) => path.extend(arc.to_kurbo().append_iter(tolerance)),
            Event::Close => path.close_path(),
        });

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::path::{ArcCmd, PathSink};
    use core::f64::consts::FRAC_PI_2;
    use kurbo::{PathEl, Point};

    #[test]
    fn kurbo_arc_sweeps_in_canvas_direction() {
        let cw = ArcCmd::new(Vec2::zero(), 3.0, 0.0, FRAC_PI_2, false).to_kurbo();
        assert!((cw.sweep_angle - FRAC_PI_2).abs() < 1e-12);

        let ccw = ArcCmd::new(Vec2::zero(), 3.0, 0.0, FRAC_PI_2, true).to_kurbo();
        assert!((ccw.sweep_angle + 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert_eq!(ccw.radii, kurbo::Vec2::new(3.0, 3.0));
    }

    #[test]
    fn arc_is_joined_and_converted_to_cubics() {
        let mut p = PathCommands::new();
        p.move_to(Vec2::zero());
        p.arc(Vec2::zero(), 10.0, 0.0, FRAC_PI_2, false);
        p.close_path();

        let bez = p.to_bez_path(0.01);
        let els = bez.elements();
        assert_eq!(els[0], PathEl::MoveTo(Point::ZERO));
        assert_eq!(els[1], PathEl::LineTo(Point::new(10.0, 0.0)));
        assert_eq!(els.last(), Some(&PathEl::ClosePath));

        let curves = &els[2..els.len() - 1];
        assert!(!curves.is_empty());
        assert!(curves.iter().all(|el| matches!(el, PathEl::CurveTo(..))));
        match curves[curves.len() - 1] {
            PathEl::CurveTo(_, _, end) => assert!((end - Point::new(0.0, 10.0)).hypot() < 1e-9),
            _ => unreachable!(),
        }
    }

    #[test]
    fn point_path_has_no_segments() {
        let mut p = PathCommands::new();
        p.move_to(Vec2::new(4.0, 2.0));
        p.close_path();

        let bez = p.to_bez_path(0.1);
        assert_eq!(bez.elements(), &[PathEl::MoveTo(Point::new(4.0, 2.0)), PathEl::ClosePath]);
        assert_eq!(bez.segments().count(), 0);
    }

    #[test]
    fn zero_tolerance_is_floored() {
        let mut p = PathCommands::new();
        p.arc(Vec2::zero(), 1.0, 0.0, 1.0, false);
        let bez = p.to_bez_path(0.0);
        assert!(bez.elements().len() > 1);
    }
}
