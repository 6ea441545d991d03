use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::scaler::common::error::Result;
use crate::scaler::geometry::{footprint, DstRect, Geometry, LinearMapper, Mapper, SrcRect, TransformMapper};
use crate::scaler::interpolation::{
    default_box_size, BoxKernel, Interpolation, Kernel, LinearKernel, NearestKernel, Sample,
};
use crate::scaler::lut::Lut;
use crate::scaler::raster::{RasterView, Scalar};
use crate::scaler::resample::types::{PixelBuffer, ScalerConfig};

/// Turns a kernel result into the pixel to store; `None` leaves the
/// destination pixel untouched.
pub(crate) trait PixelOp<P>: Sync {
    fn pixel(&self, sample: Sample) -> Option<P>;
}

struct ColorOp<'a> {
    lut: &'a Lut,
}

impl PixelOp<u32> for ColorOp<'_> {
    #[inline]
    fn pixel(&self, sample: Sample) -> Option<u32> {
        Some(match sample.value() {
            Some(v) => self.lut.apply(v),
            None => self.lut.no_value_pixel(),
        })
    }
}

struct ValueOp<'a> {
    levels: Option<&'a Lut>,
}

impl PixelOp<f64> for ValueOp<'_> {
    #[inline]
    fn pixel(&self, sample: Sample) -> Option<f64> {
        let v = sample.value()?;
        Some(match self.levels {
            Some(lut) => lut.level(v),
            None => v,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Resampler {
    config: ScalerConfig,
}

impl Resampler {
    pub fn new(config: ScalerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScalerConfig) {
        self.config = config;
    }

    /// Renders `src` of the raster into `dst` of an ARGB buffer through `lut`.
    ///
    /// Masked, NaN and out-of-range pixels get the LUT background (transparent
    /// when unset). An empty `dst` is a no-op; a `dst` reaching outside the
    /// buffer is an error and nothing is written.
    #[instrument(level = "debug", skip_all, fields(dst = ?dst, interpolation = ?interpolation))]
    #[allow(clippy::too_many_arguments)]
    pub fn resample<T: Scalar>(
        &self,
        view: &RasterView<'_, T>,
        src: &SrcRect,
        dst: &DstRect,
        dest: &mut PixelBuffer<'_, u32>,
        lut: &Lut,
        interpolation: Interpolation,
        geometry: &Geometry<'_>,
    ) -> Result<()> {
        if !dest.check_rect(dst)? {
            debug!("Empty destination rectangle, nothing to draw");
            return Ok(());
        }
        self.dispatch(view, src, dst, dest, &ColorOp { lut }, interpolation, geometry);
        Ok(())
    }

    /// Resamples raw values (or their level transform when `levels` is given)
    /// into a numeric buffer. Pixels without a sample are left untouched.
    #[instrument(level = "debug", skip_all, fields(dst = ?dst, interpolation = ?interpolation))]
    #[allow(clippy::too_many_arguments)]
    pub fn export_roi<T: Scalar>(
        &self,
        view: &RasterView<'_, T>,
        src: &SrcRect,
        dst: &DstRect,
        dest: &mut PixelBuffer<'_, f64>,
        levels: Option<&Lut>,
        interpolation: Interpolation,
        geometry: &Geometry<'_>,
    ) -> Result<()> {
        if !dest.check_rect(dst)? {
            return Ok(());
        }
        self.dispatch(view, src, dst, dest, &ValueOp { levels }, interpolation, geometry);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn dispatch<T, P, O>(
        &self,
        view: &RasterView<'_, T>,
        src: &SrcRect,
        dst: &DstRect,
        dest: &mut PixelBuffer<'_, P>,
        op: &O,
        interpolation: Interpolation,
        geometry: &Geometry<'_>,
    ) where
        T: Scalar,
        P: Copy + Send,
        O: PixelOp<P>,
    {
        match geometry {
            Geometry::Linear => {
                let mapper = LinearMapper::from_rects(src, dst);
                self.with_kernel(view, &mapper, dst, dest, op, interpolation);
            }
            Geometry::Transform { matrix, axes } => {
                let mapper = TransformMapper::new(*matrix, *axes);
                self.with_kernel(view, &mapper, dst, dest, op, interpolation);
            }
        }
    }

    fn with_kernel<T, M, P, O>(
        &self,
        view: &RasterView<'_, T>,
        mapper: &M,
        dst: &DstRect,
        dest: &mut PixelBuffer<'_, P>,
        op: &O,
        interpolation: Interpolation,
    ) where
        T: Scalar,
        M: Mapper,
        P: Copy + Send,
        O: PixelOp<P>,
    {
        match interpolation {
            Interpolation::Nearest => self.render(view, mapper, &NearestKernel, dst, dest, op),
            Interpolation::Linear => self.render(view, mapper, &LinearKernel, dst, dest, op),
            Interpolation::AntiAliased { size } => {
                let size = size.unwrap_or_else(|| {
                    default_box_size(footprint(mapper, dst), self.config.max_aa_size)
                });
                debug!(size, "Anti-aliasing window");
                self.render(view, mapper, &BoxKernel::new(size), dst, dest, op);
            }
        }
    }

    /// Per-pixel loop over `dst`, one destination row per task when parallel.
    /// Every pixel is a pure function of its index, so row order never
    /// changes the output.
    pub(crate) fn render<T, M, K, P, O>(
        &self,
        view: &RasterView<'_, T>,
        mapper: &M,
        kernel: &K,
        dst: &DstRect,
        dest: &mut PixelBuffer<'_, P>,
        op: &O,
    ) where
        T: Scalar,
        M: Mapper,
        K: Kernel,
        P: Copy + Send,
        O: PixelOp<P>,
    {
        // check_rect has already confined dst to the buffer
        let stride = dest.width();
        let (x0, x1) = (dst.x0 as usize, dst.x1 as usize);
        let (y0, rows) = (dst.y0 as usize, dst.height() as usize);
        let pixels = (x1 - x0) * rows;

        let render_row = |(y, row): (usize, &mut [P])| {
            let py = y as f64;
            for (x, out) in row.iter_mut().enumerate().take(x1).skip(x0) {
                let (sx, sy) = mapper.map(x as f64, py);
                if let Some(p) = op.pixel(kernel.sample(view, sx, sy)) {
                    *out = p;
                }
            }
        };

        if self.config.parallel && pixels >= self.config.min_parallel_pixels {
            debug!(pixels, "Rendering rows in parallel");
            dest.data_mut()
                .par_chunks_mut(stride)
                .enumerate()
                .skip(y0)
                .take(rows)
                .for_each(render_row);
        } else {
            dest.data_mut()
                .chunks_mut(stride)
                .enumerate()
                .skip(y0)
                .take(rows)
                .for_each(render_row);
        }
    }
}

/// Single-call entry point with the default configuration.
pub fn resample<T: Scalar>(
    view: &RasterView<'_, T>,
    src: &SrcRect,
    dst: &DstRect,
    dest: &mut PixelBuffer<'_, u32>,
    lut: &Lut,
    interpolation: Interpolation,
    geometry: &Geometry<'_>,
) -> Result<()> {
    Resampler::default().resample(view, src, dst, dest, lut, interpolation, geometry)
}

/// Single-call ROI export with the default configuration.
pub fn export_roi<T: Scalar>(
    view: &RasterView<'_, T>,
    src: &SrcRect,
    dst: &DstRect,
    dest: &mut PixelBuffer<'_, f64>,
    levels: Option<&Lut>,
    interpolation: Interpolation,
    geometry: &Geometry<'_>,
) -> Result<()> {
    Resampler::default().export_roi(view, src, dst, dest, levels, interpolation, geometry)
}
