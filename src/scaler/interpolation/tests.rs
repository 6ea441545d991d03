use crate::scaler::interpolation::{
    default_box_size, BoxKernel, Kernel, LinearKernel, NearestKernel, Sample,
};
use crate::scaler::raster::{Raster, RasterView};

fn grid() -> Raster<u8> {
    // 3x3, value = 10*y + x
    Raster::from_fn(3, 3, |x, y| (10 * y + x) as u8).unwrap()
}

#[test]
fn test_nearest_rounds_half_up() {
    let raster = grid();
    let view = raster.as_view();
    assert_eq!(NearestKernel.sample(&view, 1.2, 1.6), Sample::Value(21.0));
    assert_eq!(NearestKernel.sample(&view, 0.5, 0.0), Sample::Value(1.0));
    assert_eq!(NearestKernel.sample(&view, -0.5, -0.5), Sample::Value(0.0));
    assert_eq!(NearestKernel.sample(&view, 2.49, 2.49), Sample::Value(22.0));
}

#[test]
fn test_out_of_bounds_for_every_kernel() {
    let raster = grid();
    let view = raster.as_view();
    for (x, y) in [(-0.6, 0.0), (2.5, 0.0), (0.0, 2.5), (f64::NAN, 1.0)] {
        assert_eq!(NearestKernel.sample(&view, x, y), Sample::OutOfBounds);
        assert_eq!(LinearKernel.sample(&view, x, y), Sample::OutOfBounds);
        assert_eq!(BoxKernel::new(3).sample(&view, x, y), Sample::OutOfBounds);
    }
}

#[test]
fn test_nearest_reports_masked() {
    let raster = grid().with_mask(vec![true, false, false, false, false, false, false, false, false]).unwrap();
    assert_eq!(NearestKernel.sample(&raster.as_view(), 0.1, 0.2), Sample::Masked);
}

#[test]
fn test_linear_half_integer_is_exact_mean() {
    let data = [0.0f64, 1.0, 2.0, 3.0, 4.0];
    let view = RasterView::new(5, 1, &data).unwrap();
    for k in 0..4 {
        let x = k as f64 + 0.5;
        assert_eq!(LinearKernel.sample(&view, x, 0.0), Sample::Value((data[k] + data[k + 1]) / 2.0));
    }
}

#[test]
fn test_linear_centre_of_quad() {
    let raster = grid();
    assert_eq!(LinearKernel.sample(&raster.as_view(), 0.5, 0.5), Sample::Value(5.5));
}

#[test]
fn test_linear_replicates_edges() {
    let raster = grid();
    let view = raster.as_view();
    assert_eq!(LinearKernel.sample(&view, -0.25, 0.0), Sample::Value(0.0));
    assert_eq!(LinearKernel.sample(&view, 2.25, 2.0), Sample::Value(22.0));
}

#[test]
fn test_linear_falls_back_to_heaviest_unmasked() {
    let mut mask = vec![false; 9];
    mask[0] = true;
    let raster = grid().with_mask(mask).unwrap();
    let view = raster.as_view();
    // weights: (0,0)=0.56 masked, (1,0)=0.24, (0,1)=0.14, (1,1)=0.06
    assert_eq!(LinearKernel.sample(&view, 0.3, 0.2), Sample::Value(1.0));
    // integer coordinate on a masked sample: the only contributor is masked
    assert_eq!(LinearKernel.sample(&view, 0.0, 0.0), Sample::Masked);
}

#[test]
fn test_linear_all_masked() {
    let raster = grid().with_mask(vec![true; 9]).unwrap();
    assert_eq!(LinearKernel.sample(&raster.as_view(), 1.5, 1.5), Sample::Masked);
}

#[test]
fn test_linear_nan_neighbour_uses_fallback() {
    let data = [1.0f32, f32::NAN];
    let view = RasterView::new(2, 1, &data).unwrap();
    assert_eq!(LinearKernel.sample(&view, 0.25, 0.0), Sample::Value(1.0));
}

#[test]
fn test_box_mean_and_exclusions() {
    let mut mask = vec![false; 9];
    mask[4] = true;
    let raster = grid().with_mask(mask).unwrap();
    let view = raster.as_view();
    // full 3x3 window without the centre: (0+1+2+10+12+20+21+22)/8
    assert_eq!(BoxKernel::new(3).sample(&view, 1.0, 1.0), Sample::Value(88.0 / 8.0));
    // corner window clipped to the raster: samples 0, 1, 10 (11 is masked)
    assert_eq!(BoxKernel::new(3).sample(&view, 0.0, 0.0), Sample::Value(11.0 / 3.0));
    // size 1 is nearest
    assert_eq!(BoxKernel::new(1).sample(&view, 1.6, 0.4), Sample::Value(2.0));
    // even size brackets the coordinate: 10, 20, 21 (11 is masked)
    assert_eq!(BoxKernel::new(2).sample(&view, 0.5, 1.9), Sample::Value(17.0));
}

#[test]
fn test_box_fully_masked() {
    let raster = grid().with_mask(vec![true; 9]).unwrap();
    assert_eq!(BoxKernel::new(2).sample(&raster.as_view(), 1.0, 1.0), Sample::Masked);
}

#[test]
fn test_default_box_size() {
    assert_eq!(default_box_size(0.25, 64), 1);
    assert_eq!(default_box_size(1.0, 64), 1);
    assert_eq!(default_box_size(2.2, 64), 3);
    assert_eq!(default_box_size(500.0, 64), 64);
    assert_eq!(default_box_size(f64::INFINITY, 64), 1);
}
