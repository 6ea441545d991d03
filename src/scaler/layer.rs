//! Image layer module
//!
//! State holder for one displayed raster: the data, its LUT inputs, the
//! interpolation mode and the histogram cache.

mod image;
mod options;


pub use image::ImageLayer;
pub use options::ExportOptions;
