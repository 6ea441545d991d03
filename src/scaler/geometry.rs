//! Geometry module
//!
//! Converts destination pixel indices into fractional source raster indices,
//! either through an axis-aligned rectangle map or through a 3x3 affine
//! matrix optionally followed by per-axis coordinate lookups (XY mode).

mod rect;
mod affine;
mod axes;
mod mapper;


pub use rect::{SrcRect, DstRect};
pub use affine::Affine;
pub use axes::{AxisLookup, XyAxes};
pub use mapper::{Geometry, Mapper, LinearMapper, TransformMapper, footprint};
