use core::f64::consts::TAU;

/// Wraps `angle` into `[0, 2π)`.
#[inline]
pub fn normalize_radian(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 { a + TAU } else { a }
}

/// Normalizes a start/end pair for drawing in the given direction.
///
/// The start is wrapped into `[0, 2π)` and the end shifted by the same amount.
/// Afterwards `end >= start` when drawing clockwise (increasing angle) and
/// `end <= start` when `anticlockwise`, and the two never differ by more than
/// a full turn. A raw difference of at least 2π in the drawing direction
/// becomes exactly one full turn.
pub fn normalize_arc_angles(start: f64, end: f64, anticlockwise: bool) -> (f64, f64) {
    let new_start = normalize_radian(start);
    let shifted_end = end + (new_start - start);

    let new_end = if !anticlockwise && shifted_end - new_start >= TAU {
        new_start + TAU
    } else if anticlockwise && new_start - shifted_end >= TAU {
        new_start - TAU
    } else if !anticlockwise && new_start > shifted_end {
        new_start + (TAU - normalize_radian(new_start - shifted_end))
    } else if anticlockwise && new_start < shifted_end {
        new_start - (TAU - normalize_radian(shifted_end - new_start))
    } else {
        shifted_end
    };

    (new_start, new_end)
}

/// Signed sweep of a canvas-style arc from `start` to `end`.
///
/// Positive sweeps run towards increasing angles. Equal angles give zero.
pub fn arc_sweep(start: f64, end: f64, anticlockwise: bool) -> f64 {
    if start == end {
        return 0.0;
    }
    let (s, e) = normalize_arc_angles(start, end, anticlockwise);
    e - s
}

/// Absolute angular extent covered when measuring from `start` to `end` in
/// the given winding. Always within `[0, 2π]`.
#[inline]
pub fn sweep_angle(start: f64, end: f64, clockwise: bool) -> f64 {
    arc_sweep(start, end, !clockwise).abs()
}
