use core::f64::consts::TAU;

use crate::coords::Vec2;
use crate::path::{PathCommands, PathSink};

use super::{build_sector_path, CornerRadius};

/// Annular sector descriptor.
///
/// `radius` and `inner_radius` may be given in either order; the larger one
/// is drawn as the outer ring. Angles are radians and may take any value.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorShape {
    pub center: Vec2,
    pub radius: f64,
    pub inner_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Winding used both to measure the sweep and to draw the outer ring.
    pub clockwise: bool,
    pub corner_radius: CornerRadius,
}

impl SectorShape {
    /// Full disc of `radius` around `center`, no hole, no rounding.
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self {
            center,
            radius,
            inner_radius: 0.0,
            start_angle: 0.0,
            end_angle: TAU,
            clockwise: true,
            corner_radius: CornerRadius::default(),
        }
    }

    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: impl Into<CornerRadius>) -> Self {
        self.corner_radius = corner_radius.into();
        self
    }

    /// Streams the outline into `sink`.
    #[inline]
    pub fn build_path<S: PathSink + ?Sized>(&self, sink: &mut S) {
        build_sector_path(self, sink);
    }

    /// Records the outline.
    pub fn to_path(&self) -> PathCommands {
        let mut path = PathCommands::new();
        build_sector_path(self, &mut path);
        path
    }
}
