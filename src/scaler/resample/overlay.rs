//! Mask overlay rendering and straight-alpha compositing

use tracing::instrument;

use crate::scaler::common::error::Result;
use crate::scaler::geometry::{DstRect, Geometry, LinearMapper, SrcRect, TransformMapper};
use crate::scaler::interpolation::{Kernel, Sample};
use crate::scaler::lut::alpha_byte;
use crate::scaler::raster::{RasterView, Scalar};
use crate::scaler::resample::resampler::{PixelOp, Resampler};
use crate::scaler::resample::types::PixelBuffer;

/// Nearest lookup into the mask only: 1.0 where masked, 0.0 elsewhere.
struct MaskKernel;

impl Kernel for MaskKernel {
    #[inline]
    fn sample<T: Scalar>(&self, view: &RasterView<'_, T>, x: f64, y: f64) -> Sample {
        if !view.contains(x, y) {
            return Sample::OutOfBounds;
        }
        let ix = (x + 0.5).floor() as usize;
        let iy = (y + 0.5).floor() as usize;
        Sample::Value(if view.is_masked(ix, iy) { 1.0 } else { 0.0 })
    }
}

struct MaskOp {
    masked: u32,
    unmasked: u32,
}

impl PixelOp<u32> for MaskOp {
    #[inline]
    fn pixel(&self, sample: Sample) -> Option<u32> {
        match sample {
            Sample::Value(v) if v > 0.5 => Some(self.masked),
            Sample::Value(_) => Some(self.unmasked),
            _ => None,
        }
    }
}

impl Resampler {
    /// Draws the raster's mask: masked samples white at `alpha_masked`,
    /// unmasked samples black at `alpha_unmasked`. Pixels mapping outside the
    /// raster are left untouched.
    #[instrument(level = "debug", skip_all, fields(dst = ?dst))]
    #[allow(clippy::too_many_arguments)]
    pub fn render_mask_overlay<T: Scalar>(
        &self,
        view: &RasterView<'_, T>,
        src: &SrcRect,
        dst: &DstRect,
        dest: &mut PixelBuffer<'_, u32>,
        alpha_masked: f64,
        alpha_unmasked: f64,
        geometry: &Geometry<'_>,
    ) -> Result<()> {
        if !dest.check_rect(dst)? {
            return Ok(());
        }
        let op = MaskOp {
            masked: (alpha_byte(alpha_masked) << 24) | 0x00FF_FFFF,
            unmasked: alpha_byte(alpha_unmasked) << 24,
        };
        match geometry {
            Geometry::Linear => {
                let mapper = LinearMapper::from_rects(src, dst);
                self.render(view, &mapper, &MaskKernel, dst, dest, &op);
            }
            Geometry::Transform { matrix, axes } => {
                let mapper = TransformMapper::new(*matrix, *axes);
                self.render(view, &mapper, &MaskKernel, dst, dest, &op);
            }
        }
        Ok(())
    }
}

/// Mask overlay with the default configuration.
pub fn render_mask_overlay<T: Scalar>(
    view: &RasterView<'_, T>,
    src: &SrcRect,
    dst: &DstRect,
    dest: &mut PixelBuffer<'_, u32>,
    alpha_masked: f64,
    alpha_unmasked: f64,
    geometry: &Geometry<'_>,
) -> Result<()> {
    Resampler::default().render_mask_overlay(view, src, dst, dest, alpha_masked, alpha_unmasked, geometry)
}

#[inline]
fn over(dst: u32, src: u32) -> u32 {
    let sa = src >> 24;
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }
    let da = dst >> 24;
    let sa_f = sa as f64 / 255.0;
    let da_f = da as f64 / 255.0 * (1.0 - sa_f);
    let out_a = sa_f + da_f;
    let channel = |shift: u32| {
        let s = ((src >> shift) & 0xFF) as f64;
        let d = ((dst >> shift) & 0xFF) as f64;
        (((s * sa_f + d * da_f) / out_a).round() as u32).min(255)
    };
    let a = ((out_a * 255.0).round() as u32).min(255);
    (a << 24) | (channel(16) << 16) | (channel(8) << 8) | channel(0)
}

/// Source-over compositing of `overlay` onto `dest` inside `rect`, both
/// buffers holding straight (non-premultiplied) ARGB.
pub fn blend_over(
    dest: &mut PixelBuffer<'_, u32>,
    overlay: &PixelBuffer<'_, u32>,
    rect: &DstRect,
) -> Result<()> {
    if !dest.check_rect(rect)? || !overlay.check_rect(rect)? {
        return Ok(());
    }
    let (x0, x1) = (rect.x0 as usize, rect.x1 as usize);
    let (dw, ow) = (dest.width(), overlay.width());
    for y in rect.y0 as usize..rect.y1 as usize {
        let src_row = &overlay.data()[y * ow + x0..y * ow + x1];
        let dst_row = &mut dest.data_mut()[y * dw + x0..y * dw + x1];
        for (d, &s) in dst_row.iter_mut().zip(src_row) {
            *d = over(*d, s);
        }
    }
    Ok(())
}
