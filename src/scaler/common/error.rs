use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScalerError {
    #[error("Data length mismatch: {width}x{height} raster needs {expected} samples, got {actual}")]
    DataLength {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Mask shape mismatch: raster has {expected} samples, mask has {actual}")]
    MaskShape { expected: usize, actual: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Destination rectangle ({x0}, {y0}, {x1}, {y1}) exceeds {width}x{height} buffer")]
    DestinationOutOfBounds {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        width: usize,
        height: usize,
    },

    #[error("Color table must have {expected} entries, got {actual}")]
    ColorTableSize { expected: usize, actual: usize },

    #[error("Unknown colormap: {0}")]
    UnknownColormap(String),

    #[error("{axis} lookup has {actual} entries, expected {dim} (centers) or {} (edges)", .dim + 1)]
    AxisLength {
        axis: &'static str,
        dim: usize,
        actual: usize,
    },

    #[error("{axis} lookup is not strictly increasing at index {index}")]
    NonMonotonicAxis { axis: &'static str, index: usize },

    #[error("Invalid histogram bin count: {0}")]
    InvalidBinCount(u32),

    #[error("Not enough memory for a {width}x{height} buffer ({bytes} bytes)")]
    AllocationFailed {
        width: usize,
        height: usize,
        bytes: usize,
    },

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScalerError>;
