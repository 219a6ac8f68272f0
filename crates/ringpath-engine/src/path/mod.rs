//! Path command stream.
//!
//! Responsibilities:
//! - define the renderer-agnostic command set (`PathCommand`)
//! - define the sink contract the sector builder writes into (`PathSink`)
//! - record commands for inspection and post-processing (`PathCommands`):
//!   conversion to `kurbo::BezPath`, bounds, flattening to polylines, SVG path
//!   data

mod bez;
mod bounds;
mod cmd;
mod flatten;
mod list;
mod sink;
mod svg;
mod walk;

pub use cmd::{ArcCmd, PathCommand};
pub use flatten::{FlattenOptions, Polyline, Vertex};
pub use list::PathCommands;
pub use sink::PathSink;
