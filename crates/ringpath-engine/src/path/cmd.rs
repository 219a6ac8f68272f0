use crate::coords::Vec2;
use crate::geom::{arc_sweep, point_on_circle};

/// Circular arc payload, canvas `arc()` semantics.
///
/// Angles are radians. With `anticlockwise == false` the arc runs towards
/// increasing angles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub anticlockwise: bool,
}

impl ArcCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f64, start_angle: f64, end_angle: f64, anticlockwise: bool) -> Self {
        Self { center, radius, start_angle, end_angle, anticlockwise }
    }

    /// Signed sweep in `[-2π, 2π]`; positive runs towards increasing angles.
    #[inline]
    pub fn sweep(&self) -> f64 {
        arc_sweep(self.start_angle, self.end_angle, self.anticlockwise)
    }

    #[inline]
    pub fn point_at(&self, angle: f64) -> Vec2 {
        point_on_circle(self.center, self.radius, angle)
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.point_at(self.start_angle)
    }

    /// Where the arc actually stops, after sweep normalization.
    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.start_angle + self.sweep())
    }

    /// Same arc as a `kurbo::Arc`, with the canvas direction folded into the
    /// sign of `sweep_angle`.
    pub fn to_kurbo(&self) -> kurbo::Arc {
        kurbo::Arc {
            center: self.center.into(),
            radii: kurbo::Vec2::new(self.radius, self.radius),
            start_angle: self.start_angle,
            sweep_angle: self.sweep(),
            x_rotation: 0.0,
        }
    }
}

/// Renderer-agnostic path command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc(ArcCmd),
    ClosePath,
}
