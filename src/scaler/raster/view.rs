use crate::scaler::common::error::{Result, ScalerError};
use crate::scaler::raster::types::Scalar;

fn checked_len(width: usize, height: usize, actual: usize) -> Result<usize> {
    let expected = width
        .checked_mul(height)
        .ok_or(ScalerError::InvalidDimensions(width, height))?;
    if expected != actual {
        return Err(ScalerError::DataLength {
            width,
            height,
            expected,
            actual,
        });
    }
    Ok(expected)
}

/// Owned raster, as held by an image layer.
#[derive(Debug, Clone)]
pub struct Raster<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
    mask: Option<Vec<bool>>,
}

impl<T: Scalar> Raster<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        checked_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
            mask: None,
        })
    }

    /// Builds a raster by evaluating `f(x, y)` for every sample.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(ScalerError::InvalidDimensions(width, height))?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::from_vec(width, height, data)
    }

    pub fn with_mask(mut self, mask: Vec<bool>) -> Result<Self> {
        self.set_mask(Some(mask))?;
        Ok(self)
    }

    pub fn set_mask(&mut self, mask: Option<Vec<bool>>) -> Result<()> {
        if let Some(mask) = &mask {
            if mask.len() != self.data.len() {
                return Err(ScalerError::MaskShape {
                    expected: self.data.len(),
                    actual: mask.len(),
                });
            }
        }
        self.mask = mask;
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn mask(&self) -> Option<&[bool]> {
        self.mask.as_deref()
    }

    pub fn mask_mut(&mut self) -> Option<&mut [bool]> {
        self.mask.as_deref_mut()
    }

    pub fn as_view(&self) -> RasterView<'_, T> {
        RasterView {
            width: self.width,
            height: self.height,
            data: &self.data,
            mask: self.mask.as_deref(),
        }
    }
}

/// Borrowed, read-only raster handed to the engine for one call.
#[derive(Debug, Clone, Copy)]
pub struct RasterView<'a, T> {
    width: usize,
    height: usize,
    data: &'a [T],
    mask: Option<&'a [bool]>,
}

impl<'a, T: Scalar> RasterView<'a, T> {
    pub fn new(width: usize, height: usize, data: &'a [T]) -> Result<Self> {
        checked_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
            mask: None,
        })
    }

    pub fn with_mask(mut self, mask: &'a [bool]) -> Result<Self> {
        if mask.len() != self.data.len() {
            return Err(ScalerError::MaskShape {
                expected: self.data.len(),
                actual: mask.len(),
            });
        }
        self.mask = Some(mask);
        Ok(self)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &'a [T] {
        self.data
    }

    pub fn mask(&self) -> Option<&'a [bool]> {
        self.mask
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Whether a fractional index coordinate lies in `[-0.5, dim-0.5)` on both axes.
    /// NaN coordinates are never inside.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= -0.5 && x < self.width as f64 - 0.5 && y >= -0.5 && y < self.height as f64 - 0.5
    }

    #[inline]
    pub fn is_masked(&self, x: usize, y: usize) -> bool {
        match self.mask {
            Some(mask) => mask[y * self.width + x],
            None => false,
        }
    }

    /// Sample at an integer index, `None` when masked or NaN.
    /// Caller guarantees `x < width` and `y < height`.
    #[inline]
    pub fn value(&self, x: usize, y: usize) -> Option<f64> {
        let idx = y * self.width + x;
        if let Some(mask) = self.mask {
            if mask[idx] {
                return None;
            }
        }
        let v = self.data[idx].to_f64();
        if v.is_nan() { None } else { Some(v) }
    }

    /// Sample at an integer index with bounds checking.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.value(x, y)
    }

    /// Iterates the usable (unmasked, non-NaN) samples of one row.
    pub fn row_values(&self, y: usize) -> impl Iterator<Item = f64> + 'a {
        self.row_values_in(y, 0, self.width)
    }

    /// Usable samples of row `y` restricted to columns `[x0, x1)`.
    pub fn row_values_in(&self, y: usize, x0: usize, x1: usize) -> impl Iterator<Item = f64> + 'a {
        let start = y * self.width;
        let data = &self.data[start + x0..start + x1];
        let mask = self.mask.map(|m| &m[start + x0..start + x1]);
        data.iter().enumerate().filter_map(move |(i, v)| {
            if mask.is_some_and(|m| m[i]) {
                return None;
            }
            let v = v.to_f64();
            if v.is_nan() { None } else { Some(v) }
        })
    }
}

/// NaN-aware, mask-aware `(min, max)` over the finite samples of a raster.
/// Returns `None` when no such sample exists.
pub fn full_range<T: Scalar>(view: &RasterView<'_, T>) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for y in 0..view.height() {
        for v in view.row_values(y).filter(|v| v.is_finite()) {
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
    }
    range
}
