//! Interpolation module
//!
//! Kernels read raw sample values around a fractional source index and
//! report a tagged [`Sample`]; color conversion happens later, in the
//! resampler.

mod types;
mod kernels;

#[cfg(test)]
mod tests;

pub use types::{Interpolation, Sample};
pub use kernels::{Kernel, NearestKernel, LinearKernel, BoxKernel, default_box_size};
