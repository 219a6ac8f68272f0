use core::f64::consts::{PI, TAU};

use crate::coords::{CornerRadii, Vec2};
use crate::geom::{intersect, point_on_circle, sweep_angle, tangent_fillet, EPSILON};
use crate::path::PathSink;

use super::SectorShape;

/// Sector corners, relative to the sector center.
struct Edges {
    outer_start: Vec2,
    outer_end: Vec2,
    inner_start: Vec2,
    inner_end: Vec2,
}

impl Edges {
    fn new(radius: f64, inner_radius: f64, start: f64, end: f64) -> Self {
        let o = Vec2::zero();
        Self {
            outer_start: point_on_circle(o, radius, start),
            outer_end: point_on_circle(o, radius, end),
            inner_start: point_on_circle(o, inner_radius, start),
            inner_end: point_on_circle(o, inner_radius, end),
        }
    }
}

/// Fillet radii after clamping against the ring geometry.
struct FilletLimits {
    /// Requested radii, each limited to half the ring thickness.
    radii: CornerRadii,
    outer_max: f64,
    inner_max: f64,
    /// Largest outer / inner fillet that still fits between the radial edges.
    outer_limit: f64,
    inner_limit: f64,
}

impl FilletLimits {
    fn new(requested: CornerRadii, radius: f64, inner_radius: f64, sweep: f64, edges: &Edges) -> Self {
        let half_ring = (radius - inner_radius).abs() / 2.0;
        let radii = requested.clamped(half_ring);
        let outer_max = radii.outer_max();
        let inner_max = radii.inner_max();

        let mut outer_limit = outer_max;
        let mut inner_limit = inner_max;

        // Past a half turn the radial edges diverge and never cross.
        if (outer_max > EPSILON || inner_max > EPSILON) && sweep < PI {
            let crossing = intersect(edges.outer_start, edges.inner_start, edges.outer_end, edges.inner_end);
            if let Some(it) = crossing {
                let v0 = edges.outer_start - it;
                let v1 = edges.outer_end - it;
                let cos = (v0.dot(v1) / (v0.length() * v1.length())).clamp(-1.0, 1.0);
                let a = 1.0 / (cos.acos() / 2.0).sin();
                let b = it.length();

                outer_limit = outer_max.min((radius - b) / (a + 1.0));
                inner_limit = inner_max.min((inner_radius - b) / (a - 1.0));

                log::trace!(
                    "sector fillet limits: outer {outer_max} -> {outer_limit}, inner {inner_max} -> {inner_limit}"
                );
            }
        }

        Self { radii, outer_max, inner_max, outer_limit, inner_limit }
    }
}

/// Builds the outline of `shape` into `sink`.
///
/// Emission order:
/// 1. outer ring from start to end angle (with start/end fillets)
/// 2. straight edge into the inner ring
/// 3. inner ring from end back to start angle (with fillets)
/// 4. `close_path`
///
/// Degenerate inputs degrade to simpler geometry: a zero radius yields a
/// single point, a full turn yields a circle or annulus, a zero sweep yields a
/// straight line. If either angle is NaN or infinite nothing is emitted.
pub fn build_sector_path<S: PathSink + ?Sized>(shape: &SectorShape, sink: &mut S) {
    let mut radius = shape.radius.max(0.0);
    let mut inner_radius = shape.inner_radius.max(0.0);
    if inner_radius > radius {
        core::mem::swap(&mut radius, &mut inner_radius);
    }

    let (start, end) = (shape.start_angle, shape.end_angle);
    if !start.is_finite() || !end.is_finite() {
        log::debug!("sector skipped: non-finite angle (start {start}, end {end})");
        return;
    }

    let c = shape.center;
    let clockwise = shape.clockwise;

    if radius <= EPSILON {
        log::trace!("sector: point");
        sink.move_to(c);
        sink.close_path();
        return;
    }

    let sweep = sweep_angle(start, end, clockwise);

    if sweep > TAU - EPSILON {
        log::trace!("sector: full ring r={radius} r0={inner_radius}");
        sink.move_to(c + point_on_circle(Vec2::zero(), radius, start));
        sink.arc(c, radius, start, end, !clockwise);

        if inner_radius > EPSILON {
            sink.move_to(c + point_on_circle(Vec2::zero(), inner_radius, end));
            sink.arc(c, inner_radius, end, start, clockwise);
        }
        sink.close_path();
        return;
    }

    let edges = Edges::new(radius, inner_radius, start, end);

    if sweep <= EPSILON {
        log::trace!("sector: collapsed to a line");
        sink.move_to(c + edges.outer_start);
        sink.line_to(c + edges.inner_end);
        sink.close_path();
        return;
    }

    log::trace!("sector: r={radius} r0={inner_radius} sweep={sweep}");

    let requested = shape.corner_radius.resolve(inner_radius, radius);
    let limits = FilletLimits::new(requested, radius, inner_radius, sweep, &edges);

    outer_ring(sink, c, radius, start, end, clockwise, &edges, &limits);

    if inner_radius > EPSILON {
        inner_ring(sink, c, inner_radius, start, end, clockwise, &edges, &limits);
    } else {
        sink.line_to(c + edges.inner_end);
    }

    sink.close_path();
}

#[allow(clippy::too_many_arguments)]
fn outer_ring<S: PathSink + ?Sized>(
    sink: &mut S,
    c: Vec2,
    radius: f64,
    start: f64,
    end: f64,
    clockwise: bool,
    edges: &Edges,
    limits: &FilletLimits,
) {
    let ccw = !clockwise;

    if limits.outer_limit <= EPSILON {
        sink.move_to(c + edges.outer_start);
        sink.arc(c, radius, start, end, ccw);
        return;
    }

    let cr_start = limits.radii.outer_start.min(limits.outer_limit);
    let cr_end = limits.radii.outer_end.min(limits.outer_limit);
    let ct0 = tangent_fillet(edges.inner_start, edges.outer_start, radius, cr_start, clockwise);
    let ct1 = tangent_fillet(edges.outer_end, edges.inner_end, radius, cr_end, clockwise);

    sink.move_to(c + ct0.edge_point());

    // Both fillets shrunk to the same size: they meet and replace the ring arc.
    if limits.outer_limit < limits.outer_max && cr_start == cr_end {
        sink.arc(c + ct0.center, limits.outer_limit, ct0.edge_angle(), ct1.edge_angle(), ccw);
        return;
    }

    if cr_start > 0.0 {
        sink.arc(c + ct0.center, cr_start, ct0.edge_angle(), ct0.ring_angle(), ccw);
    }
    sink.arc(c, radius, ct0.ring_point().angle(), ct1.ring_point().angle(), ccw);
    if cr_end > 0.0 {
        sink.arc(c + ct1.center, cr_end, ct1.ring_angle(), ct1.edge_angle(), ccw);
    }
}

#[allow(clippy::too_many_arguments)]
fn inner_ring<S: PathSink + ?Sized>(
    sink: &mut S,
    c: Vec2,
    inner_radius: f64,
    start: f64,
    end: f64,
    clockwise: bool,
    edges: &Edges,
    limits: &FilletLimits,
) {
    let ccw = !clockwise;

    if limits.inner_limit <= EPSILON {
        sink.line_to(c + edges.inner_end);
        sink.arc(c, inner_radius, end, start, clockwise);
        return;
    }

    let cr_start = limits.radii.inner_start.min(limits.inner_limit);
    let cr_end = limits.radii.inner_end.min(limits.inner_limit);
    // Inner fillets bulge away from the center: negative radius.
    let ct0 = tangent_fillet(edges.inner_end, edges.outer_end, inner_radius, -cr_end, clockwise);
    let ct1 = tangent_fillet(edges.outer_start, edges.inner_start, inner_radius, -cr_start, clockwise);

    sink.line_to(c + ct0.edge_point());

    if limits.inner_limit < limits.inner_max && cr_start == cr_end {
        sink.arc(c + ct0.center, limits.inner_limit, ct0.edge_angle(), ct1.edge_angle(), ccw);
        return;
    }

    if cr_end > 0.0 {
        sink.arc(c + ct0.center, cr_end, ct0.edge_angle(), ct0.ring_angle(), ccw);
    }
    sink.arc(c, inner_radius, ct0.ring_point().angle(), ct1.ring_point().angle(), clockwise);
    if cr_start > 0.0 {
        sink.arc(c + ct1.center, cr_start, ct1.ring_angle(), ct1.edge_angle(), ccw);
    }
}
