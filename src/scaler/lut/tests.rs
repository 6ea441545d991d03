use crate::scaler::common::error::ScalerError;
use crate::scaler::lut::{
    alpha_byte, build_lut, ColorTable, ColormapSpec, Lut, LutParams, LUT_MAX, LUT_SIZE, TRANSPARENT,
};

fn ramp_table() -> Vec<u32> {
    (0..LUT_SIZE as u32).collect()
}

#[test]
fn test_range_maps_min_to_zero_and_max_to_top() {
    let lut = build_lut(10.0, 20.0, &ramp_table(), 1.0, false).unwrap();
    assert_eq!(lut.index(10.0), 0);
    assert_eq!(lut.index(20.0), 1023);
    assert_eq!(lut.index(-1e300), 0);
    assert_eq!(lut.index(1e300), 1023);
    assert_eq!(lut.apply(20.0), 0xFF00_0000 | 1023);
}

#[test]
fn test_degenerate_range_uses_fixed_scale() {
    let lut = build_lut(5.0, 5.0, &ramp_table(), 1.0, false).unwrap();
    assert_eq!(lut.scale(), 1023.0);
    assert_eq!(lut.offset(), 5.0);
    // round(5*1023 + 5) clamps to the last entry
    assert_eq!(lut.index(5.0), 1023);
    assert_eq!(lut.apply(5.0), lut.table()[1023]);
}

#[test]
fn test_round_trip_within_one_bucket() {
    let (min, max) = (-3.5, 1200.25);
    let lut = build_lut(min, max, &ramp_table(), 1.0, false).unwrap();
    let bucket = (max - min) / LUT_MAX;
    for k in 0..=200 {
        let v = min + (max - min) * k as f64 / 200.0;
        let back = lut.value_of(lut.index(v));
        assert!((back - v).abs() <= bucket, "v={v} back={back}");
    }
}

#[test]
fn test_uniform_alpha() {
    let lut = build_lut(0.0, 1.0, &ramp_table(), 0.5, false).unwrap();
    assert!(lut.table().iter().all(|p| p >> 24 == 128));
    assert_eq!(alpha_byte(-0.2), 0);
    assert_eq!(alpha_byte(1.7), 255);
}

#[test]
fn test_alpha_mask_ramp() {
    let lut = build_lut(0.0, 1.0, &ramp_table(), 1.0, true).unwrap();
    assert_eq!(lut.table()[0] >> 24, 0);
    assert_eq!(lut.table()[1023] >> 24, 255);
    assert_eq!(lut.table()[512] >> 24, (255.0f64 * 512.0 / 1023.0).round() as u32);
    // RGB is untouched by the alpha policy
    assert_eq!(lut.table()[700] & 0x00FF_FFFF, 700);
}

#[test]
fn test_color_table_alpha_bits_are_ignored() {
    let table = vec![0xAB12_3456; LUT_SIZE];
    let lut = build_lut(0.0, 1.0, &table, 1.0, false).unwrap();
    assert_eq!(lut.table()[3], 0xFF12_3456);
}

#[test]
fn test_range_change_keeps_table() {
    let mut lut = Lut::new(0.0, 1.0, ColorTable::gray(), 1.0, false);
    let before = lut.table().to_vec();
    lut.set_range(-100.0, 100.0);
    assert_eq!(lut.table(), &before[..]);
    assert_eq!(lut.index(0.0), 512);
}

#[test]
fn test_level_is_clamped_and_unquantized() {
    let lut = Lut::new(0.0, 1023.0, ColorTable::gray(), 1.0, false);
    assert_eq!(lut.level(12.25), 12.25);
    assert_eq!(lut.level(-4.0), 0.0);
    assert_eq!(lut.level(5000.0), LUT_MAX);
}

#[test]
fn test_background_pixel() {
    let mut lut = Lut::new(0.0, 1.0, ColorTable::gray(), 1.0, false);
    assert_eq!(lut.no_value_pixel(), TRANSPARENT);
    lut.set_background(Some(0xFF11_2233));
    assert_eq!(lut.no_value_pixel(), 0xFF11_2233);
}

#[test]
fn test_color_table_size_is_checked() {
    let err = build_lut(0.0, 1.0, &[0u32; 12], 1.0, false).unwrap_err();
    assert!(matches!(err, ScalerError::ColorTableSize { expected: 1024, actual: 12 }));
}

#[test]
fn test_named_colormaps() {
    let gray = ColorTable::named("gray").unwrap();
    assert_eq!(gray.entries()[0], 0x000000);
    assert_eq!(gray.entries()[1023], 0xFFFFFF);
    let jet = ColorTable::named("jet").unwrap();
    assert_eq!(jet.entries()[0], 0x000080);
    assert_eq!(jet.entries()[1023], 0x800000);
    assert!(matches!(
        ColorTable::named("rainbow-unicorn"),
        Err(ScalerError::UnknownColormap(_))
    ));
}

#[test]
fn test_params_round_trip_through_json() {
    let params = LutParams {
        min: -1.5,
        max: 42.0,
        colormap: ColormapSpec::Named("hot".to_string()),
        alpha: 0.75,
        alpha_is_mask: true,
        background: Some(0xFF00_00FF),
    };
    let json = serde_json::to_string(&params).unwrap();
    let back: LutParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);

    let lut = back.build().unwrap();
    assert_eq!(lut.range(), (-1.5, 42.0));
    assert_eq!(lut.background(), Some(0xFF00_00FF));

    let captured = LutParams::from_lut(&lut);
    assert_eq!(captured.colormap, ColormapSpec::Inline(ColorTable::named("hot").unwrap().entries().to_vec()));
}
