//! Raster scaling module
//!
//! This module maps a 2D raster of scalar samples onto an ARGB pixel buffer,
//! with separate modules for lookup tables, histograms, interpolation kernels,
//! geometry and the resampling loop itself, plus the image layer, analysis
//! and snapshot export built on top of them.

pub mod common;
pub mod raster;
pub mod lut;
pub mod histogram;
pub mod interpolation;
pub mod geometry;
pub mod resample;
pub mod analysis;
pub mod layer;
pub mod snapshot;

pub use common::{
    ScalerError,
    Result,
};

pub use raster::{
    Raster,
    RasterView,
    Scalar,
    SampleKind,
    full_range,
};

pub use lut::{
    Lut,
    LutParams,
    ColormapSpec,
    ColorTable,
    COLORMAP_NAMES,
    LUT_SIZE,
    LUT_MAX,
    TRANSPARENT,
    build_lut,
};

pub use histogram::{
    Histogram,
    HistogramCache,
    HistogramSource,
    SliceSource,
    compute_histogram,
    compute_histogram as histogram,
};

pub use interpolation::{
    Interpolation,
    Sample,
};

pub use geometry::{
    SrcRect,
    DstRect,
    Affine,
    AxisLookup,
    XyAxes,
    Geometry,
};

pub use resample::{
    PixelBuffer,
    Resampler,
    ScalerConfig,
    ScalerConfigBuilder,
    resample,
    export_roi,
    render_mask_overlay,
    blend_over,
};

pub use analysis::{
    IndexRect,
    RegionStats,
    region_stats,
    x_section,
    y_section,
    average_x_section,
    average_y_section,
};

pub use layer::{ExportOptions, ImageLayer};

pub use snapshot::{
    ArgbImage,
    ValueImage,
    TiffCompression,
    SnapshotConfig,
    SnapshotConfigBuilder,
    SnapshotWriter,
    StandardTiffWriter,
    SnapshotPipeline,
};
