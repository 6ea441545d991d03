//! Raster resampling engine: maps a 2D sample grid onto an ARGB destination
//! through a geometric mapping, an interpolation kernel and a lookup table.

pub mod logger;
pub mod scaler;
