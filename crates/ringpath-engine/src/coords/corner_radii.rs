/// Resolved fillet radii for the four corners of an annular sector.
///
/// "Start" and "end" refer to the sector's start and end angle; "inner" and
/// "outer" to the ring edge the corner sits on. Negative values are treated as
/// zero by the sector builder.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub inner_start: f64,
    pub inner_end: f64,
    pub outer_start: f64,
    pub outer_end: f64,
}

impl CornerRadii {
    #[inline]
    pub const fn new(inner_start: f64, inner_end: f64, outer_start: f64, outer_end: f64) -> Self {
        Self { inner_start, inner_end, outer_start, outer_end }
    }

    /// Returns a copy with negative and non-finite radii replaced by zero.
    pub fn sanitized(self) -> Self {
        fn clean(v: f64) -> f64 {
            if v.is_finite() && v > 0.0 { v } else { 0.0 }
        }
        Self::new(
            clean(self.inner_start),
            clean(self.inner_end),
            clean(self.outer_start),
            clean(self.outer_end),
        )
    }

    /// Returns a copy with every radius limited to `max`.
    pub fn clamped(self, max: f64) -> Self {
        Self::new(
            self.inner_start.min(max),
            self.inner_end.min(max),
            self.outer_start.min(max),
            self.outer_end.min(max),
        )
    }

    /// Larger of the two inner radii.
    #[inline]
    pub fn inner_max(self) -> f64 {
        self.inner_start.max(self.inner_end)
    }

    /// Larger of the two outer radii.
    #[inline]
    pub fn outer_max(self) -> f64 {
        self.outer_start.max(self.outer_end)
    }
}
