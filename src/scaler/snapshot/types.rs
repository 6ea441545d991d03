//! Snapshot image and configuration types

/// Rendered ARGB snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct ArgbImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u32>,
}

/// Exported sample values; NaN where no sample was available
#[derive(Debug, Clone, PartialEq)]
pub struct ValueImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f64>,
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

/// Configuration for snapshot export
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (2 for horizontal differencing).
    /// Only applied to ARGB snapshots.
    pub predictor: Option<u16>,
    /// Whether to validate snapshot dimensions before rendering
    pub validate_dimensions: bool,
    /// Largest accepted width or height
    pub max_dimension: Option<usize>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::DeflateBalanced,
            predictor: None,
            validate_dimensions: true,
            max_dimension: Some(65_535),
        }
    }
}

impl SnapshotConfig {
    pub fn builder() -> SnapshotConfigBuilder {
        SnapshotConfigBuilder::default()
    }
}

/// Builder for SnapshotConfig
#[derive(Default)]
pub struct SnapshotConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl SnapshotConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> SnapshotConfig {
        let default = SnapshotConfig::default();
        SnapshotConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
