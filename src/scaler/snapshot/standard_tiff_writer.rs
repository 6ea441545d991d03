use std::io::{Cursor, Write};

use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{colortype, Compression, TiffEncoder};
use tiff::tags::Predictor;
use tracing::debug;

use crate::scaler::common::error::{Result, ScalerError};
use crate::scaler::snapshot::types::{ArgbImage, SnapshotConfig, TiffCompression, ValueImage};
use crate::scaler::snapshot::writer::SnapshotWriter;

/// Writes ARGB snapshots as 8-bit RGBA and value exports as 64-bit float
/// grayscale.
pub struct StandardTiffWriter;

fn compression(config: &SnapshotConfig) -> Compression {
    match config.compression {
        TiffCompression::None => Compression::Uncompressed,
        TiffCompression::Lzw => Compression::Lzw,
        TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
        TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
        TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
    }
}

fn tiff_dimensions(width: usize, height: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(ScalerError::InvalidDimensions(width, height)),
    }
}

/// `0xAARRGGBB` words to `[r, g, b, a]` bytes.
fn argb_to_rgba8(pixels: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pixels.len() * 4);
    for &p in pixels {
        bytes.extend_from_slice(&[(p >> 16) as u8, (p >> 8) as u8, p as u8, (p >> 24) as u8]);
    }
    bytes
}

impl SnapshotWriter for StandardTiffWriter {
    fn write_argb(&self, image: &ArgbImage, output: &mut dyn Write, config: &SnapshotConfig) -> Result<()> {
        debug!("Encoding RGBA TIFF: {}x{}", image.width, image.height);
        let (width, height) = tiff_dimensions(image.width, image.height)?;
        let rgba = argb_to_rgba8(&image.data);

        let mut buffer = Vec::new();
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| ScalerError::EncodeError(e.to_string()))?
            .with_compression(compression(config));

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => Predictor::Horizontal,
                _ => Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder
            .write_image::<colortype::RGBA8>(width, height, &rgba)
            .map_err(|e| ScalerError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!(bytes = buffer.len(), "TIFF encoding complete");
        Ok(())
    }

    fn write_values(&self, image: &ValueImage, output: &mut dyn Write, config: &SnapshotConfig) -> Result<()> {
        debug!("Encoding float TIFF: {}x{}", image.width, image.height);
        let (width, height) = tiff_dimensions(image.width, image.height)?;

        let mut buffer = Vec::new();
        TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| ScalerError::EncodeError(e.to_string()))?
            .with_compression(compression(config))
            .write_image::<colortype::Gray64Float>(width, height, &image.data)
            .map_err(|e| ScalerError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!(bytes = buffer.len(), "TIFF encoding complete");
        Ok(())
    }
}
