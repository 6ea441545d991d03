//! Raster storage module
//!
//! Row-major sample grids with an optional exclusion mask. The engine only
//! ever borrows a [`RasterView`] for the duration of one call.

mod types;
mod view;

#[cfg(test)]
mod tests;

pub use types::{Scalar, SampleKind};
pub use view::{Raster, RasterView, full_range};
