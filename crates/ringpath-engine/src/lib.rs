//! Ringpath engine crate.
//!
//! Builds outlines of annular sectors (pie and donut slices) whose four
//! corners may each carry an independent circular fillet, and records them as
//! renderer-agnostic path commands.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `Rect`, `CornerRadii` |
//! | [`geom`] | line intersection, fillet construction, angle normalization |
//! | [`sector`] | `SectorShape`, corner-radius shorthand, `build_sector_path` |
//! | [`path`] | `PathCommand`, `PathSink`, `PathCommands` (`BezPath` conversion, bounds, flattening, SVG) |
//! | [`logging`] | `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use ringpath_engine::coords::Vec2;
//! use ringpath_engine::sector::SectorShape;
//!
//! let slice = SectorShape::new(Vec2::new(100.0, 100.0), 80.0)
//!     .with_inner_radius(40.0)
//!     .with_angles(0.0, std::f64::consts::FRAC_PI_2)
//!     .with_corner_radius(6.0);
//!
//! let path = slice.to_path();
//! assert!(!path.is_empty());
//! let d = path.to_svg_path_data(2);
//! assert!(d.starts_with('M') && d.ends_with('Z'));
//! ```

pub mod coords;
pub mod geom;
pub mod logging;
pub mod path;
pub mod sector;

// Re-exported so callers of `to_bez_path` share the same kurbo version.
pub use kurbo;
