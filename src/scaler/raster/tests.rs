use crate::scaler::common::error::ScalerError;
use crate::scaler::raster::{full_range, Raster, RasterView, SampleKind, Scalar};

#[test]
fn test_view_rejects_wrong_length() {
    let data = [1u8, 2, 3];
    let err = RasterView::new(2, 2, &data).unwrap_err();
    assert!(matches!(err, ScalerError::DataLength { expected: 4, actual: 3, .. }));
}

#[test]
fn test_view_rejects_mismatched_mask() {
    let data = [1u8, 2, 3, 4];
    let mask = [false; 3];
    let err = RasterView::new(2, 2, &data).unwrap().with_mask(&mask).unwrap_err();
    assert!(matches!(err, ScalerError::MaskShape { expected: 4, actual: 3 }));
}

#[test]
fn test_value_skips_masked_and_nan() {
    let data = [1.0f32, f32::NAN, 3.0, 4.0];
    let mask = [false, false, true, false];
    let view = RasterView::new(2, 2, &data).unwrap().with_mask(&mask).unwrap();
    assert_eq!(view.value(0, 0), Some(1.0));
    assert_eq!(view.value(1, 0), None);
    assert_eq!(view.value(0, 1), None);
    assert_eq!(view.get(2, 0), None);
    assert_eq!(view.row_values(1).collect::<Vec<_>>(), vec![4.0]);
}

#[test]
fn test_contains_half_open_range() {
    let data = [0u16; 6];
    let view = RasterView::new(3, 2, &data).unwrap();
    assert!(view.contains(-0.5, -0.5));
    assert!(view.contains(2.49, 1.49));
    assert!(!view.contains(2.5, 0.0));
    assert!(!view.contains(0.0, 1.5));
    assert!(!view.contains(-0.51, 0.0));
    assert!(!view.contains(f64::NAN, 0.0));
}

#[test]
fn test_full_range_ignores_nan_inf_and_mask() {
    let raster = Raster::from_vec(4, 1, vec![f64::NAN, -2.0, f64::INFINITY, 7.0])
        .unwrap()
        .with_mask(vec![false, false, false, true])
        .unwrap();
    assert_eq!(full_range(&raster.as_view()), Some((-2.0, -2.0)));

    let empty = Raster::<f32>::from_vec(0, 0, vec![]).unwrap();
    assert_eq!(full_range(&empty.as_view()), None);
}

#[test]
fn test_from_fn_is_row_major() {
    let raster = Raster::from_fn(3, 2, |x, y| (10 * y + x) as i32).unwrap();
    assert_eq!(raster.data(), &[0, 1, 2, 10, 11, 12]);
    assert_eq!(raster.as_view().row(1), &[10, 11, 12]);
}

#[test]
fn test_sample_kind_ranges() {
    assert_eq!(<u8 as Scalar>::KIND, SampleKind::U8);
    assert_eq!(SampleKind::I16.value_range(), (-32768.0, 32767.0));
    assert_eq!(SampleKind::U32.value_range(), (0.0, 4294967295.0));
    assert!(SampleKind::F32.is_float());
    assert!(!SampleKind::I8.is_float());
}
