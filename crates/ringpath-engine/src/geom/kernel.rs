use crate::coords::Vec2;

use super::EPSILON;

/// Intersection of the infinite lines through `(p0, p1)` and `(p2, p3)`.
///
/// Returns `None` when the lines are parallel or close to it (squared
/// determinant of the two directions below [`EPSILON`]). Callers treat that as
/// "no usable intersection", not as an error.
pub fn intersect(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Option<Vec2> {
    let d10 = p1 - p0;
    let d32 = p3 - p2;

    let det = d10.cross(d32);
    if det * det < EPSILON {
        return None;
    }

    let t = d32.cross(p0 - p2) / det;
    Some(p0 + d10 * t)
}

/// Polar to Cartesian.
#[inline]
pub fn point_on_circle(center: Vec2, radius: f64, angle: f64) -> Vec2 {
    center + Vec2::from_angle(angle) * radius
}

/// Fillet circle blending a straight sector edge into a ring arc.
///
/// All positions are relative to the sector center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TangentFillet {
    /// Center of the fillet circle.
    pub center: Vec2,
    /// Fillet center → tangent point on the straight edge.
    pub edge_offset: Vec2,
    /// Fillet center → tangent point on the ring circle.
    pub ring_offset: Vec2,
}

impl TangentFillet {
    /// Tangent point on the straight edge.
    #[inline]
    pub fn edge_point(&self) -> Vec2 {
        self.center + self.edge_offset
    }

    /// Tangent point on the ring circle.
    #[inline]
    pub fn ring_point(&self) -> Vec2 {
        self.center + self.ring_offset
    }

    /// Angle of the edge tangent point as seen from the fillet center.
    #[inline]
    pub fn edge_angle(&self) -> f64 {
        self.edge_offset.angle()
    }

    /// Angle of the ring tangent point as seen from the fillet center.
    #[inline]
    pub fn ring_angle(&self) -> f64 {
        self.ring_offset.angle()
    }
}

/// Builds the fillet of radius `fillet_radius` where the straight edge
/// `p0 → p1` meets the circle of radius `radius` around the origin.
///
/// The edge is offset perpendicular by `fillet_radius` (to the left or right
/// depending on `clockwise`); the fillet center lies on that offset line at
/// distance `radius - fillet_radius` from the origin. Of the two candidate
/// centers the one nearer the offset segment's midpoint is kept; the other
/// root sits beyond the edge and would produce a self-intersecting corner.
///
/// A negative `fillet_radius` puts the fillet outside the circle, which is
/// what the inner ring of an annulus needs.
pub fn tangent_fillet(
    p0: Vec2,
    p1: Vec2,
    radius: f64,
    fillet_radius: f64,
    clockwise: bool,
) -> TangentFillet {
    let d01 = p0 - p1;
    let signed = if clockwise { fillet_radius } else { -fillet_radius };
    let lo = signed / d01.length();
    let offset = Vec2::new(lo * d01.y, -lo * d01.x);

    let a = p0 + offset;
    let b = p1 + offset;
    let mid = a.midpoint(b);

    let d = b - a;
    let d2 = d.length_squared();
    let r = radius - fillet_radius;
    let s = a.cross(b);
    let sign = if d.y < 0.0 { -1.0 } else { 1.0 };
    let disc = sign * (r * r * d2 - s * s).max(0.0).sqrt();

    let c0 = Vec2::new((s * d.y - d.x * disc) / d2, (-s * d.x - d.y * disc) / d2);
    let c1 = Vec2::new((s * d.y + d.x * disc) / d2, (-s * d.x + d.y * disc) / d2);

    let center = if (c0 - mid).length_squared() > (c1 - mid).length_squared() { c1 } else { c0 };

    TangentFillet {
        center,
        edge_offset: -offset,
        ring_offset: center * (radius / r - 1.0),
    }
}
