use tracing::{debug, instrument};

use crate::scaler::analysis::{self, IndexRect, RegionStats};
use crate::scaler::common::error::Result;
use crate::scaler::geometry::{DstRect, Geometry, SrcRect};
use crate::scaler::histogram::{Histogram, HistogramCache, HistogramSource};
use crate::scaler::interpolation::Interpolation;
use crate::scaler::layer::options::ExportOptions;
use crate::scaler::lut::{ColorTable, Lut, LutParams};
use crate::scaler::raster::{full_range, Raster, RasterView, Scalar};
use crate::scaler::resample::{PixelBuffer, Resampler, ScalerConfig};

/// One raster with everything needed to draw it.
///
/// Replacing the data through [`set_data`](Self::set_data) resets the level
/// range and drops the cached histogram.
#[derive(Debug, Clone)]
pub struct ImageLayer<T> {
    raster: Raster<T>,
    lut: Lut,
    interpolation: Interpolation,
    histogram: HistogramCache,
    resampler: Resampler,
}

impl<T: Scalar> ImageLayer<T> {
    /// Gray, opaque layer whose level range spans the data.
    pub fn new(raster: Raster<T>) -> Self {
        let (min, max) = full_range(&raster.as_view()).unwrap_or((0.0, 1.0));
        Self {
            raster,
            lut: Lut::new(min, max, ColorTable::gray(), 1.0, false),
            interpolation: Interpolation::default(),
            histogram: HistogramCache::new(),
            resampler: Resampler::default(),
        }
    }

    pub fn with_config(mut self, config: ScalerConfig) -> Self {
        self.resampler.set_config(config);
        self
    }

    /// Replaces the raster. The level range becomes `range`, or the finite
    /// data range when `None`; with no finite sample the old range stays.
    pub fn set_data(&mut self, raster: Raster<T>, range: Option<(f64, f64)>) {
        self.raster = raster;
        self.histogram.invalidate();
        if let Some((min, max)) = range.or_else(|| full_range(&self.raster.as_view())) {
            self.lut.set_range(min, max);
        }
        debug!(
            width = self.raster.width(),
            height = self.raster.height(),
            "Layer data replaced"
        );
    }

    pub fn raster(&self) -> &Raster<T> {
        &self.raster
    }

    pub fn view(&self) -> RasterView<'_, T> {
        self.raster.as_view()
    }

    pub fn lut(&self) -> &Lut {
        &self.lut
    }

    pub fn set_lut_range(&mut self, min: f64, max: f64) {
        self.lut.set_range(min, max);
    }

    pub fn lut_range(&self) -> (f64, f64) {
        self.lut.range()
    }

    /// Finite data range, `None` when every sample is masked or NaN.
    pub fn full_range(&self) -> Option<(f64, f64)> {
        full_range(&self.view())
    }

    /// Representable range of the sample type.
    pub fn max_range(&self) -> (f64, f64) {
        T::KIND.value_range()
    }

    pub fn set_color_table(&mut self, colors: ColorTable) {
        self.lut.set_color_table(colors);
    }

    pub fn set_colormap(&mut self, name: &str) -> Result<()> {
        self.lut.set_color_table(ColorTable::named(name)?);
        Ok(())
    }

    pub fn set_alpha(&mut self, alpha: f64, alpha_is_mask: bool) {
        self.lut.set_alpha(alpha, alpha_is_mask);
    }

    pub fn set_background(&mut self, background: Option<u32>) {
        self.lut.set_background(background);
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    pub fn lut_params(&self) -> LutParams {
        LutParams::from_lut(&self.lut)
    }

    pub fn apply_lut_params(&mut self, params: &LutParams) -> Result<()> {
        self.lut = params.build()?;
        Ok(())
    }

    /// Renders `src` of the raster into `dst` of an ARGB buffer.
    #[instrument(level = "debug", skip(self, dest, geometry))]
    pub fn draw(
        &self,
        src: &SrcRect,
        dst: &DstRect,
        dest: &mut PixelBuffer<'_, u32>,
        geometry: &Geometry<'_>,
    ) -> Result<()> {
        self.resampler
            .resample(&self.view(), src, dst, dest, &self.lut, self.interpolation, geometry)
    }

    /// Resampled values of `src`. By default these are the raw samples under
    /// nearest lookup; `options` selects LUT levels and interpolation.
    pub fn export_roi(
        &self,
        src: &SrcRect,
        dst: &DstRect,
        dest: &mut PixelBuffer<'_, f64>,
        options: &ExportOptions,
        geometry: &Geometry<'_>,
    ) -> Result<()> {
        let levels = options.apply_lut.then_some(&self.lut);
        let interpolation = options.interpolation(self.interpolation);
        self.resampler
            .export_roi(&self.view(), src, dst, dest, levels, interpolation, geometry)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render_mask(
        &self,
        src: &SrcRect,
        dst: &DstRect,
        dest: &mut PixelBuffer<'_, u32>,
        alpha_masked: f64,
        alpha_unmasked: f64,
        geometry: &Geometry<'_>,
    ) -> Result<()> {
        self.resampler
            .render_mask_overlay(&self.view(), src, dst, dest, alpha_masked, alpha_unmasked, geometry)
    }

    pub fn x_section(&self, row: usize, apply_lut: bool) -> Option<Vec<f64>> {
        analysis::x_section(&self.view(), row, apply_lut.then_some(&self.lut))
    }

    pub fn y_section(&self, col: usize, apply_lut: bool) -> Option<Vec<f64>> {
        analysis::y_section(&self.view(), col, apply_lut.then_some(&self.lut))
    }

    pub fn average_x_section(&self, rect: &IndexRect, apply_lut: bool) -> Vec<f64> {
        analysis::average_x_section(&self.view(), rect, apply_lut.then_some(&self.lut))
    }

    pub fn average_y_section(&self, rect: &IndexRect, apply_lut: bool) -> Vec<f64> {
        analysis::average_y_section(&self.view(), rect, apply_lut.then_some(&self.lut))
    }

    pub fn stats(&self, rect: &IndexRect) -> Option<RegionStats> {
        analysis::region_stats(&self.view(), rect)
    }
}

impl<T: Scalar> HistogramSource for ImageLayer<T> {
    fn histogram(&mut self, n_bins: u32) -> Result<Histogram> {
        let view = self.raster.as_view();
        self.histogram.get_or_compute(&view, n_bins).cloned()
    }
}
