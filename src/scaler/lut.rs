//! Lookup table module
//!
//! Maps raw sample values to ARGB pixels through a linear level transform,
//! a 1024-entry color table and an alpha policy.

mod table;
mod colormap;
mod params;

#[cfg(test)]
mod tests;

pub use table::{Lut, build_lut, LUT_SIZE, LUT_MAX, TRANSPARENT, alpha_byte};
pub use colormap::{ColorTable, COLORMAP_NAMES};
pub use params::{LutParams, ColormapSpec};
