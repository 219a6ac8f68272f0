//! Stateless numeric primitives used by the sector builder.
//!
//! Nothing in here knows about sectors: the kernel intersects lines and builds
//! fillet circles, the angle helpers resolve sweeps from start/end pairs.

mod angle;
mod kernel;

pub use angle::{arc_sweep, normalize_arc_angles, normalize_radian, sweep_angle};
pub use kernel::{intersect, point_on_circle, tangent_fillet, TangentFillet};

/// Tolerance for every "is this effectively zero" test (sweep, radius,
/// determinant). Not a visual tolerance: it guards divisions, and the
/// merge-vs-no-merge fillet branch depends on its exact value.
pub const EPSILON: f64 = 1e-4;
