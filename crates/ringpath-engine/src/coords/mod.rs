//! Coordinate and geometry types shared by the kernel, the sector builder and
//! the path sinks.
//!
//! Canonical space:
//! - Caller units (no implicit scaling)
//! - Angles in radians, measured from +X towards +Y
//!
//! Whether +Y points up or down is a concern of whoever rasterizes the path.

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
