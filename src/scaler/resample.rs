//! Resampling module
//!
//! Orchestrates geometry, kernel and LUT for every pixel of a destination
//! rectangle, writing into caller-owned buffers.

mod types;
mod resampler;
mod overlay;


pub use types::{PixelBuffer, ScalerConfig, ScalerConfigBuilder};
pub use resampler::{Resampler, resample, export_roi};
pub use overlay::{blend_over, render_mask_overlay};
