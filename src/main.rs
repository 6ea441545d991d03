use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use rastermap::logger;
use rastermap::scaler::{
    Affine, DstRect, ExportOptions, Geometry, HistogramSource, ImageLayer, Interpolation, Raster, SnapshotConfig,
    SnapshotPipeline, SrcRect, TiffCompression,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InterpolationArg {
    Nearest,
    Linear,
    Antialiased,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

/// Renders a synthetic test raster through the resampling engine and
/// writes the result as a TIFF snapshot.
#[derive(Debug, Parser)]
#[command(name = "rastermap", version)]
struct Args {
    /// Output TIFF path
    #[arg(short, long, default_value = "snapshot.tif")]
    output: PathBuf,

    /// Side length of the synthetic raster
    #[arg(long, default_value_t = 500)]
    samples: usize,

    /// Snapshot width in pixels
    #[arg(long, default_value_t = 400)]
    width: usize,

    /// Snapshot height in pixels
    #[arg(long, default_value_t = 400)]
    height: usize,

    #[arg(short, long, value_enum, default_value_t = InterpolationArg::Linear)]
    interpolation: InterpolationArg,

    /// Anti-aliasing window; derived from the scale ratio when omitted
    #[arg(long)]
    aa_size: Option<usize>,

    #[arg(short, long, default_value = "jet")]
    colormap: String,

    #[arg(long, default_value_t = 1.0)]
    alpha: f64,

    /// Ramp alpha along the color table
    #[arg(long)]
    alpha_is_mask: bool,

    /// Rotation angle in degrees
    #[arg(short, long, default_value_t = 0.0)]
    rotate: f64,

    /// Mask a disc in the middle of the raster
    #[arg(long)]
    mask_disc: bool,

    #[arg(long, default_value_t = 64)]
    bins: u32,

    #[arg(long, value_enum, default_value_t = CompressionArg::DeflateBalanced)]
    compression: CompressionArg,

    /// Write resampled values (64-bit float) instead of colors
    #[arg(long)]
    export_values: bool,
}

/// `cos(x^2 + y^2)` over `[-5, 5]^2` with a grid line every 50 samples.
fn test_image(n: usize) -> Result<Raster<f32>> {
    let step = 10.0 / (n.max(2) - 1) as f64;
    let raster = Raster::from_fn(n, n, |i, j| {
        if i % 50 == 0 || j % 50 == 0 {
            return 1.5;
        }
        let x = -5.0 + i as f64 * step;
        let y = -5.0 + j as f64 * step;
        (x * x + y * y).cos() as f32
    })?;
    Ok(raster)
}

fn disc_mask(n: usize) -> Vec<bool> {
    let c = (n as f64 - 1.0) / 2.0;
    let r2 = (n as f64 / 4.0).powi(2);
    (0..n * n)
        .map(|k| {
            let (x, y) = ((k % n) as f64 - c, (k / n) as f64 - c);
            x * x + y * y < r2
        })
        .collect()
}

fn main() -> Result<()> {
    logger::init();
    let args = Args::parse();

    info!("Starting rastermap...");

    let mut raster = test_image(args.samples)?;
    if args.mask_disc {
        raster.set_mask(Some(disc_mask(args.samples)))?;
    }

    let mut layer = ImageLayer::new(raster);
    layer
        .set_colormap(&args.colormap)
        .with_context(|| format!("colormap '{}'", args.colormap))?;
    layer.set_alpha(args.alpha, args.alpha_is_mask);
    layer.set_interpolation(match args.interpolation {
        InterpolationArg::Nearest => Interpolation::Nearest,
        InterpolationArg::Linear => Interpolation::Linear,
        InterpolationArg::Antialiased => Interpolation::AntiAliased { size: args.aa_size },
    });

    let hist = layer.histogram(args.bins)?;
    let peak = hist
        .counts
        .iter()
        .enumerate()
        .max_by_key(|&(_, c)| *c)
        .map(|(i, _)| i)
        .unwrap_or(0);
    info!(
        bins = hist.n_bins(),
        samples = hist.total(),
        lo = hist.edges.first().copied().unwrap_or(f64::NAN),
        hi = hist.edges.last().copied().unwrap_or(f64::NAN),
        peak_bin = peak,
        peak_log_count = hist.log_counts().get(peak).copied().unwrap_or(0.0),
        "Histogram"
    );
    if let Some((min, max)) = layer.full_range() {
        info!(min, max, "Level range");
    } else {
        warn!("No finite samples, keeping default level range");
    }

    let n = args.samples as f64;
    let src = SrcRect::full(args.samples, args.samples);
    let geometry = if args.rotate != 0.0 {
        let to_src = Affine::from_rects(&src, &DstRect::full(args.width, args.height));
        let centre = n / 2.0 - 0.5;
        Geometry::Transform {
            matrix: Affine::rotation_about(args.rotate.to_radians(), centre, centre) * to_src,
            axes: None,
        }
    } else {
        Geometry::Linear
    };

    let config = SnapshotConfig::builder()
        .compression(args.compression.into())
        .build();
    let pipeline = SnapshotPipeline::new(config);
    info!("Compression: {:?}", pipeline.config().compression);

    let mut output = std::fs::File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    if args.export_values {
        pipeline.export_values(&layer, &src, args.width, args.height, &ExportOptions::default(), &geometry, &mut output)?;
    } else {
        pipeline.snapshot(&layer, &src, args.width, args.height, &geometry, &mut output)?;
    }

    info!(output = %args.output.display(), "Snapshot written");
    Ok(())
}
