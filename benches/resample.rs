use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use rastermap::scaler::{
    compute_histogram, Affine, ColorTable, DstRect, Geometry, Interpolation, Lut, PixelBuffer,
    Raster, Resampler, ScalerConfig, SnapshotConfig, SnapshotPipeline, ImageLayer, SrcRect,
    TiffCompression,
};
use std::io::Cursor;

fn generate_raster(width: usize, height: usize) -> Raster<u16> {
    Raster::from_fn(width, height, |x, y| ((x * 7 + y * 13) % 4096) as u16).unwrap()
}

fn benchmark_interpolation_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation_modes");
    let raster = generate_raster(1000, 1000);
    let lut = Lut::new(0.0, 4095.0, ColorTable::named("jet").unwrap(), 1.0, false);
    let resampler = Resampler::default();

    let modes = vec![
        (Interpolation::Nearest, "nearest"),
        (Interpolation::Linear, "linear"),
        (Interpolation::AntiAliased { size: None }, "antialiased"),
    ];

    for (interpolation, label) in modes {
        group.bench_with_input(BenchmarkId::from_parameter(label), &interpolation, |b, &interpolation| {
            let mut pixels = vec![0u32; 500 * 500];
            b.iter(|| {
                let mut dest = PixelBuffer::new(500, 500, &mut pixels).unwrap();
                let _ = resampler.resample(
                    black_box(&raster.as_view()),
                    &SrcRect::full(1000, 1000),
                    &DstRect::full(500, 500),
                    &mut dest,
                    &lut,
                    interpolation,
                    &Geometry::Linear,
                );
            });
        });
    }

    group.finish();
}

fn benchmark_parallelism(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallelism");
    let raster = generate_raster(2000, 2000);
    let lut = Lut::new(0.0, 4095.0, ColorTable::gray(), 1.0, false);
    let rotation = Affine::rotation_about(0.3, 1000.0, 1000.0) * Affine::scaling(2.0, 2.0);

    let configs = vec![
        (ScalerConfig::sequential(), "sequential"),
        (ScalerConfig::default(), "parallel"),
    ];

    for (config, label) in configs {
        let resampler = Resampler::new(config);
        group.bench_function(label, |b| {
            let mut pixels = vec![0u32; 1000 * 1000];
            b.iter(|| {
                let mut dest = PixelBuffer::new(1000, 1000, &mut pixels).unwrap();
                let _ = resampler.resample(
                    black_box(&raster.as_view()),
                    &SrcRect::full(2000, 2000),
                    &DstRect::full(1000, 1000),
                    &mut dest,
                    &lut,
                    Interpolation::Linear,
                    &Geometry::Transform { matrix: rotation, axes: None },
                );
            });
        });
    }

    group.finish();
}

fn benchmark_histogram_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let raster = generate_raster(width, height);
        group.bench_with_input(BenchmarkId::from_parameter(label), &raster, |b, raster| {
            b.iter(|| {
                let _ = compute_histogram(black_box(&raster.as_view()), 256);
            });
        });
    }

    group.finish();
}

fn benchmark_snapshot_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_compression");
    let layer = ImageLayer::new(generate_raster(500, 500));

    let compressions = vec![
        (TiffCompression::None, "none"),
        (TiffCompression::Lzw, "lzw"),
        (TiffCompression::DeflateFast, "deflate_fast"),
    ];

    for (compression, label) in compressions {
        group.bench_function(label, |b| {
            let config = SnapshotConfig::builder().compression(compression).build();
            let pipeline = SnapshotPipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.snapshot(
                    black_box(&layer),
                    &SrcRect::full(500, 500),
                    500,
                    500,
                    &Geometry::Linear,
                    &mut output,
                );
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_interpolation_modes,
    benchmark_parallelism,
    benchmark_histogram_sizes,
    benchmark_snapshot_compression
);
criterion_main!(benches);
