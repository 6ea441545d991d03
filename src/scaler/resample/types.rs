//! Destination buffer and engine configuration types

use crate::scaler::common::error::{Result, ScalerError};
use crate::scaler::geometry::DstRect;

/// Caller-owned row-major pixel buffer. The engine writes inside a requested
/// rectangle and never resizes it.
#[derive(Debug)]
pub struct PixelBuffer<'a, P> {
    width: usize,
    height: usize,
    data: &'a mut [P],
}

impl<'a, P: Copy> PixelBuffer<'a, P> {
    pub fn new(width: usize, height: usize, data: &'a mut [P]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(ScalerError::InvalidDimensions(width, height))?;
        if data.len() != expected {
            return Err(ScalerError::DataLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[P] {
        &*self.data
    }

    pub fn data_mut(&mut self) -> &mut [P] {
        &mut *self.data
    }

    pub fn pixel(&self, x: usize, y: usize) -> P {
        self.data[y * self.width + x]
    }

    /// Fails fast when `rect` reaches outside the buffer; `Ok(false)` for an
    /// empty rectangle, which callers treat as a no-op.
    pub(crate) fn check_rect(&self, rect: &DstRect) -> Result<bool> {
        if rect.is_empty() {
            return Ok(false);
        }
        if rect.x0 < 0
            || rect.y0 < 0
            || rect.x1 as i64 > self.width as i64
            || rect.y1 as i64 > self.height as i64
        {
            return Err(ScalerError::DestinationOutOfBounds {
                x0: rect.x0,
                y0: rect.y0,
                x1: rect.x1,
                y1: rect.y1,
                width: self.width,
                height: self.height,
            });
        }
        Ok(true)
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct ScalerConfig {
    /// Render destination rows on the rayon pool
    pub parallel: bool,
    /// Rectangles with fewer pixels than this stay on the calling thread
    pub min_parallel_pixels: usize,
    /// Upper bound for the derived anti-aliasing window
    pub max_aa_size: usize,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_pixels: 16_384,
            max_aa_size: 64,
        }
    }
}

impl ScalerConfig {
    pub fn builder() -> ScalerConfigBuilder {
        ScalerConfigBuilder::default()
    }

    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

/// Builder for ScalerConfig
#[derive(Default)]
pub struct ScalerConfigBuilder {
    parallel: Option<bool>,
    min_parallel_pixels: Option<usize>,
    max_aa_size: Option<usize>,
}

impl ScalerConfigBuilder {
    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn min_parallel_pixels(mut self, pixels: usize) -> Self {
        self.min_parallel_pixels = Some(pixels);
        self
    }

    pub fn max_aa_size(mut self, size: usize) -> Self {
        self.max_aa_size = Some(size);
        self
    }

    pub fn build(self) -> ScalerConfig {
        let default = ScalerConfig::default();
        ScalerConfig {
            parallel: self.parallel.unwrap_or(default.parallel),
            min_parallel_pixels: self.min_parallel_pixels.unwrap_or(default.min_parallel_pixels),
            max_aa_size: self.max_aa_size.unwrap_or(default.max_aa_size).max(1),
        }
    }
}
