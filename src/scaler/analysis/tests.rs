use crate::scaler::analysis::{
    average_x_section, average_y_section, region_stats, x_section, y_section, IndexRect,
};
use crate::scaler::lut::{ColorTable, Lut};
use crate::scaler::raster::Raster;

/// 3x2 raster
///   1  2  3
///   4  5  6
/// with (1, 1) masked.
fn sample_raster() -> Raster<i32> {
    Raster::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6])
        .unwrap()
        .with_mask(vec![false, false, false, false, true, false])
        .unwrap()
}

#[test]
fn test_sections_mark_masked_samples() {
    let raster = sample_raster();
    let view = raster.as_view();

    assert_eq!(x_section(&view, 0, None).unwrap(), vec![1.0, 2.0, 3.0]);
    let row = x_section(&view, 1, None).unwrap();
    assert_eq!(row[0], 4.0);
    assert!(row[1].is_nan());
    assert_eq!(row[2], 6.0);

    assert_eq!(y_section(&view, 2, None).unwrap(), vec![3.0, 6.0]);
    assert!(x_section(&view, 2, None).is_none());
    assert!(y_section(&view, 3, None).is_none());
}

#[test]
fn test_sections_apply_levels() {
    let raster = sample_raster();
    let lut = Lut::new(2.0, 4.0, ColorTable::gray(), 1.0, false);
    let section = x_section(&raster.as_view(), 0, Some(&lut)).unwrap();
    assert_eq!(section[0], 0.0);
    assert!((section[1] - 0.0).abs() < 1e-9);
    assert!((section[2] - 511.5).abs() < 1e-9);
}

#[test]
fn test_average_sections_skip_masked() {
    let raster = sample_raster();
    let view = raster.as_view();
    let full = IndexRect::full(3, 2);

    assert_eq!(average_x_section(&view, &full, None), vec![2.5, 2.0, 4.5]);
    assert_eq!(average_y_section(&view, &full, None), vec![2.0, 5.0]);

    let column = IndexRect::new(1, 1, 2, 2);
    let avg = average_x_section(&view, &column, None);
    assert_eq!(avg.len(), 1);
    assert!(avg[0].is_nan());
}

#[test]
fn test_region_stats() {
    let raster = sample_raster();
    let stats = region_stats(&raster.as_view(), &IndexRect::full(3, 2)).unwrap();
    assert_eq!(stats.count, 5);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 6.0);
    assert_eq!(stats.sum, 16.0);
    assert!((stats.mean - 3.2).abs() < 1e-12);
    // population variance of 1, 2, 3, 4, 6
    assert!((stats.std - 2.96f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_region_stats_empty_region() {
    let raster = sample_raster();
    let view = raster.as_view();
    assert!(region_stats(&view, &IndexRect::new(1, 1, 2, 2)).is_none());
    assert!(region_stats(&view, &IndexRect::new(2, 0, 2, 2)).is_none());
    assert!(region_stats(&view, &IndexRect::new(5, 5, 9, 9)).is_none());
}

#[test]
fn test_index_rect_from_coords() {
    let rect = IndexRect::from_coords(0.4, 1.6, 2.2, 3.0, 10, 10);
    assert_eq!(rect, IndexRect::new(0, 1, 3, 3));

    let swapped = IndexRect::from_coords(2.2, 3.0, 0.4, 1.6, 10, 10);
    assert_eq!(swapped, rect);

    let clamped = IndexRect::from_coords(-3.0, -0.5, 12.5, 4.1, 10, 4);
    assert_eq!(clamped, IndexRect::new(0, 0, 10, 4));
    assert_eq!(clamped.width(), 10);
    assert!(!clamped.is_empty());
}
