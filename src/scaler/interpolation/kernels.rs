use crate::scaler::interpolation::types::Sample;
use crate::scaler::raster::{RasterView, Scalar};

/// A sampler producing one value from a fractional source index.
///
/// Kernels are plain structs dispatched through generics so the per-pixel
/// loop is monomorphized for each mode.
pub trait Kernel: Sync {
    fn sample<T: Scalar>(&self, view: &RasterView<'_, T>, x: f64, y: f64) -> Sample;
}

/// Value at `floor(x + 0.5), floor(y + 0.5)` (round half up).
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestKernel;

impl Kernel for NearestKernel {
    #[inline]
    fn sample<T: Scalar>(&self, view: &RasterView<'_, T>, x: f64, y: f64) -> Sample {
        if !view.contains(x, y) {
            return Sample::OutOfBounds;
        }
        let ix = (x + 0.5).floor() as usize;
        let iy = (y + 0.5).floor() as usize;
        match view.value(ix, iy) {
            Some(v) => Sample::Value(v),
            None => Sample::Masked,
        }
    }
}

/// Bilinear weighting of the four surrounding samples, edge-replicated.
///
/// Only corners with a positive weight contribute. When one of them is
/// masked or NaN the result falls back to the heaviest usable contributor.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearKernel;

impl Kernel for LinearKernel {
    #[inline]
    fn sample<T: Scalar>(&self, view: &RasterView<'_, T>, x: f64, y: f64) -> Sample {
        if !view.contains(x, y) {
            return Sample::OutOfBounds;
        }
        let x_floor = x.floor();
        let y_floor = y.floor();
        let fx = x - x_floor;
        let fy = y - y_floor;
        let max_x = view.width() as isize - 1;
        let max_y = view.height() as isize - 1;
        let xa = (x_floor as isize).clamp(0, max_x) as usize;
        let xb = (x_floor as isize + 1).clamp(0, max_x) as usize;
        let ya = (y_floor as isize).clamp(0, max_y) as usize;
        let yb = (y_floor as isize + 1).clamp(0, max_y) as usize;

        let corners = [
            (xa, ya, (1.0 - fx) * (1.0 - fy)),
            (xb, ya, fx * (1.0 - fy)),
            (xa, yb, (1.0 - fx) * fy),
            (xb, yb, fx * fy),
        ];

        let mut sum = 0.0;
        let mut complete = true;
        let mut best: Option<(f64, f64)> = None;
        for &(cx, cy, w) in &corners {
            if w <= 0.0 {
                continue;
            }
            match view.value(cx, cy) {
                Some(v) => {
                    sum += w * v;
                    if best.is_none_or(|(bw, _)| w > bw) {
                        best = Some((w, v));
                    }
                }
                None => complete = false,
            }
        }

        if complete {
            Sample::Value(sum)
        } else {
            match best {
                Some((_, v)) => Sample::Value(v),
                None => Sample::Masked,
            }
        }
    }
}

/// Mean of the usable samples in an `size x size` window centred on the
/// coordinate. The window starts at `floor(x + 0.5 - (size-1)/2)`; cells
/// outside the raster, masked or NaN are skipped.
#[derive(Debug, Clone, Copy)]
pub struct BoxKernel {
    size: usize,
}

impl BoxKernel {
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl Kernel for BoxKernel {
    fn sample<T: Scalar>(&self, view: &RasterView<'_, T>, x: f64, y: f64) -> Sample {
        if !view.contains(x, y) {
            return Sample::OutOfBounds;
        }
        let n = self.size as isize;
        let half = (self.size as f64 - 1.0) / 2.0;
        let sx = (x + 0.5 - half).floor() as isize;
        let sy = (y + 0.5 - half).floor() as isize;
        let x_range = sx.max(0) as usize..(sx + n).min(view.width() as isize).max(0) as usize;
        let y_range = sy.max(0) as usize..(sy + n).min(view.height() as isize).max(0) as usize;

        let mut sum = 0.0;
        let mut count = 0usize;
        for iy in y_range {
            for ix in x_range.clone() {
                if let Some(v) = view.value(ix, iy) {
                    sum += v;
                    count += 1;
                }
            }
        }
        if count == 0 {
            Sample::Masked
        } else {
            Sample::Value(sum / count as f64)
        }
    }
}

/// Default box size for a given source-pixels-per-destination-pixel ratio:
/// `ceil(ratio)`, at least 1 and at most `max_size`.
pub fn default_box_size(src_per_dst: f64, max_size: usize) -> usize {
    if !src_per_dst.is_finite() || src_per_dst <= 1.0 {
        return 1;
    }
    (src_per_dst.ceil() as usize).clamp(1, max_size.max(1))
}
