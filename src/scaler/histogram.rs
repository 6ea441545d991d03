//! Histogram module
//!
//! NaN-aware, mask-aware binned counts over a raster, with a per-bin-count
//! cache held by the caller.

mod compute;
mod cache;

#[cfg(test)]
mod tests;

pub use compute::{Histogram, compute_histogram};
pub use cache::{HistogramCache, HistogramSource, SliceSource};
