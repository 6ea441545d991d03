use crate::scaler::common::error::ScalerError;
use crate::scaler::histogram::{compute_histogram, HistogramCache, HistogramSource, SliceSource};
use crate::scaler::raster::{Raster, RasterView};

#[test]
fn test_max_falls_in_last_bin() {
    let data = [1u8, 2, 3, 4, 5];
    let view = RasterView::new(5, 1, &data).unwrap();
    let hist = compute_histogram(&view, 4).unwrap();
    assert_eq!(hist.edges, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(hist.counts, vec![1, 1, 1, 2]);
}

#[test]
fn test_nan_and_masked_samples_are_excluded() {
    let raster = Raster::from_vec(3, 2, vec![0.0f32, f32::NAN, 10.0, 100.0, 5.0, 5.0])
        .unwrap()
        .with_mask(vec![false, false, false, true, false, false])
        .unwrap();
    let hist = compute_histogram(&raster.as_view(), 2).unwrap();
    assert_eq!(hist.edges, vec![0.0, 5.0, 10.0]);
    assert_eq!(hist.counts, vec![1, 3]);
    assert_eq!(hist.total(), 4);
}

#[test]
fn test_all_masked_gives_empty_histogram() {
    let raster = Raster::from_vec(2, 1, vec![1i16, 2])
        .unwrap()
        .with_mask(vec![true, true])
        .unwrap();
    let hist = compute_histogram(&raster.as_view(), 4).unwrap();
    assert_eq!(hist.counts, vec![0, 0, 0, 0]);
    assert_eq!(hist.edges, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_constant_raster_is_centered() {
    let data = [7u16; 9];
    let view = RasterView::new(3, 3, &data).unwrap();
    let hist = compute_histogram(&view, 3).unwrap();
    assert_eq!(hist.edges.first(), Some(&6.5));
    assert_eq!(hist.edges.last(), Some(&7.5));
    assert_eq!(hist.counts, vec![0, 9, 0]);
}

#[test]
fn test_zero_bins_is_rejected() {
    let data = [1.0f64];
    let view = RasterView::new(1, 1, &data).unwrap();
    assert!(matches!(
        compute_histogram(&view, 0),
        Err(ScalerError::InvalidBinCount(0))
    ));
}

#[test]
fn test_counts_match_edges_for_awkward_ranges() {
    let raster = Raster::from_fn(97, 13, |x, y| (x as f64 * 0.1).sin() * 3.3 + y as f64 * 0.01).unwrap();
    let view = raster.as_view();
    let hist = compute_histogram(&view, 17).unwrap();
    assert_eq!(hist.total(), 97 * 13);
    let n = hist.counts.len();
    let mut expected = vec![0u32; n];
    for &v in view.data() {
        let i = (0..n).find(|&i| v < hist.edges[i + 1]).unwrap_or(n - 1);
        expected[i] += 1;
    }
    assert_eq!(hist.counts, expected);
}

#[test]
fn test_range_wider_than_f64_stays_finite() {
    let data = [-f64::MAX, 0.0, f64::MAX];
    let view = RasterView::new(3, 1, &data).unwrap();
    let hist = compute_histogram(&view, 4).unwrap();
    assert!(hist.edges.iter().all(|e| e.is_finite()));
    assert_eq!(hist.edges.first(), Some(&-f64::MAX));
    assert_eq!(hist.edges.last(), Some(&f64::MAX));
    assert_eq!(hist.edges[2], 0.0);
    assert!(hist.edges.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(hist.counts, vec![1, 0, 1, 1]);
}

#[test]
fn test_huge_constant_raster_gets_nonzero_width() {
    for v in [1e300, -3.0e17, f64::MAX, -f64::MAX] {
        let data = [v; 4];
        let view = RasterView::new(2, 2, &data).unwrap();
        let hist = compute_histogram(&view, 3).unwrap();
        assert!(hist.edges.iter().all(|e| e.is_finite()), "{v}");
        assert!(hist.edges[0] < hist.edges[3], "{v}");
        assert_eq!(hist.total(), 4, "{v}");
    }
}

#[test]
fn test_cache_reuses_and_invalidates() {
    let data = [1.0f32, 2.0, 3.0, 4.0];
    let view = RasterView::new(2, 2, &data).unwrap();
    let mut cache = HistogramCache::new();
    assert!(cache.cached(8).is_none());

    let first = cache.get_or_compute(&view, 8).unwrap().clone();
    assert_eq!(cache.cached(8), Some(&first));
    let second = cache.get_or_compute(&view, 8).unwrap().clone();
    assert_eq!(first, second);

    assert!(cache.cached(4).is_none());
    cache.get_or_compute(&view, 4).unwrap();
    assert!(cache.cached(8).is_none());

    cache.invalidate();
    assert!(cache.cached(4).is_none());
}

#[test]
fn test_slice_source_and_log_counts() {
    let data = [0u32, 0, 0, 9];
    let mut source = SliceSource::new(&data);
    let hist = source.histogram(2).unwrap();
    assert_eq!(hist.counts, vec![3, 1]);
    let logs = hist.log_counts();
    assert!((logs[0] - 4f64.ln()).abs() < 1e-12);
    assert!((logs[1] - 2f64.ln()).abs() < 1e-12);
}
