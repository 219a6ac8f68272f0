//! Annular sector outlines.
//!
//! A `SectorShape` describes a ring segment (pie or donut slice) whose four
//! corners may each carry a circular fillet. `build_sector_path` streams its
//! outline into any `PathSink`.

mod builder;
mod corner_radius;
mod shape;

pub use builder::build_sector_path;
pub use corner_radius::{CornerRadius, ParseRadiusError, ParseRadiusErrorKind, RadiusValue};
pub use shape::SectorShape;
