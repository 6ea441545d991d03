use std::io::Write;
use std::path::Path;

use tracing::{info, info_span, instrument};

use crate::scaler::common::error::{Result, ScalerError};
use crate::scaler::geometry::{DstRect, Geometry, SrcRect};
use crate::scaler::layer::{ExportOptions, ImageLayer};
use crate::scaler::raster::Scalar;
use crate::scaler::resample::PixelBuffer;
use crate::scaler::snapshot::standard_tiff_writer::StandardTiffWriter;
use crate::scaler::snapshot::types::{ArgbImage, SnapshotConfig, ValueImage};
use crate::scaler::snapshot::writer::SnapshotWriter;

pub struct SnapshotPipeline<W: SnapshotWriter> {
    writer: W,
    config: SnapshotConfig,
}

impl SnapshotPipeline<StandardTiffWriter> {
    pub fn new(config: SnapshotConfig) -> Self {
        Self {
            writer: StandardTiffWriter,
            config,
        }
    }
}

/// `width * height` copies of `fill`; allocation failure is reported
/// instead of aborting.
fn allocate<P: Copy>(width: usize, height: usize, fill: P) -> Result<Vec<P>> {
    let len = width
        .checked_mul(height)
        .ok_or(ScalerError::InvalidDimensions(width, height))?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| ScalerError::AllocationFailed {
            width,
            height,
            bytes: len.saturating_mul(size_of::<P>()),
        })?;
    buffer.resize(len, fill);
    Ok(buffer)
}

impl<W: SnapshotWriter> SnapshotPipeline<W> {
    pub fn with_custom(writer: W, config: SnapshotConfig) -> Self {
        Self { writer, config }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ScalerError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(ScalerError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Draws `src` of the layer into a new `width x height` ARGB image.
    /// Pixels outside the raster keep the layer background.
    #[instrument(skip(self, layer, geometry))]
    pub fn render<T: Scalar>(
        &self,
        layer: &ImageLayer<T>,
        src: &SrcRect,
        width: usize,
        height: usize,
        geometry: &Geometry<'_>,
    ) -> Result<ArgbImage> {
        {
            let _span = info_span!("validate_dimensions", width, height).entered();
            self.validate_dimensions(width, height)?;
        }

        let mut data = {
            let _span = info_span!("allocate").entered();
            allocate(width, height, layer.lut().no_value_pixel())?
        };

        {
            let _span = info_span!("resample").entered();
            let mut dest = PixelBuffer::new(width, height, &mut data)?;
            layer.draw(src, &DstRect::full(width, height), &mut dest, geometry)?;
        }

        Ok(ArgbImage {
            width,
            height,
            data,
        })
    }

    /// Resampled values of `src` at `width x height`, NaN where no sample exists.
    #[instrument(skip(self, layer, geometry))]
    pub fn export<T: Scalar>(
        &self,
        layer: &ImageLayer<T>,
        src: &SrcRect,
        width: usize,
        height: usize,
        options: &ExportOptions,
        geometry: &Geometry<'_>,
    ) -> Result<ValueImage> {
        {
            let _span = info_span!("validate_dimensions", width, height).entered();
            self.validate_dimensions(width, height)?;
        }

        let mut data = {
            let _span = info_span!("allocate").entered();
            allocate(width, height, f64::NAN)?
        };

        {
            let _span = info_span!("export_roi").entered();
            let mut dest = PixelBuffer::new(width, height, &mut data)?;
            layer.export_roi(src, &DstRect::full(width, height), &mut dest, options, geometry)?;
        }

        Ok(ValueImage {
            width,
            height,
            data,
        })
    }

    /// Renders and encodes an ARGB snapshot into `output`.
    pub fn snapshot<T: Scalar>(
        &self,
        layer: &ImageLayer<T>,
        src: &SrcRect,
        width: usize,
        height: usize,
        geometry: &Geometry<'_>,
        output: &mut dyn Write,
    ) -> Result<()> {
        info!("Starting snapshot");
        let image = self.render(layer, src, width, height, geometry)?;

        {
            let _span = info_span!("encode_tiff").entered();
            self.writer.write_argb(&image, output, &self.config)?;
        }

        info!(width, height, "Snapshot complete");
        Ok(())
    }

    #[instrument(skip(self, layer, src, geometry, output_path))]
    pub fn snapshot_file<T: Scalar, P: AsRef<Path>>(
        &self,
        layer: &ImageLayer<T>,
        src: &SrcRect,
        width: usize,
        height: usize,
        geometry: &Geometry<'_>,
        output_path: P,
    ) -> Result<()> {
        let output_path = output_path.as_ref();
        info!(output = %output_path.display(), "Writing snapshot");

        let mut output_file = {
            let _span = info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ScalerError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.snapshot(layer, src, width, height, geometry, &mut output_file)
    }

    /// Exports and encodes resampled values into `output`.
    #[allow(clippy::too_many_arguments)]
    pub fn export_values<T: Scalar>(
        &self,
        layer: &ImageLayer<T>,
        src: &SrcRect,
        width: usize,
        height: usize,
        options: &ExportOptions,
        geometry: &Geometry<'_>,
        output: &mut dyn Write,
    ) -> Result<()> {
        info!("Starting value export");
        let image = self.export(layer, src, width, height, options, geometry)?;

        {
            let _span = info_span!("encode_tiff").entered();
            self.writer.write_values(&image, output, &self.config)?;
        }

        info!(width, height, "Value export complete");
        Ok(())
    }

    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SnapshotConfig) {
        self.config = config;
    }
}
