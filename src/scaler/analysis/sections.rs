use tracing::instrument;

use crate::scaler::analysis::rect::IndexRect;
use crate::scaler::lut::Lut;
use crate::scaler::raster::{RasterView, Scalar};

#[inline]
fn leveled(v: Option<f64>, levels: Option<&Lut>) -> f64 {
    match (v, levels) {
        (Some(v), Some(lut)) => lut.level(v),
        (Some(v), None) => v,
        (None, _) => f64::NAN,
    }
}

/// Samples of row `row`, NaN where masked. With `levels` every value goes
/// through the LUT level transform. `None` when the row does not exist.
pub fn x_section<T: Scalar>(view: &RasterView<'_, T>, row: usize, levels: Option<&Lut>) -> Option<Vec<f64>> {
    if row >= view.height() {
        return None;
    }
    Some((0..view.width()).map(|x| leveled(view.value(x, row), levels)).collect())
}

/// Samples of column `col`, NaN where masked.
pub fn y_section<T: Scalar>(view: &RasterView<'_, T>, col: usize, levels: Option<&Lut>) -> Option<Vec<f64>> {
    if col >= view.width() {
        return None;
    }
    Some((0..view.height()).map(|y| leveled(view.value(col, y), levels)).collect())
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Per-column mean over the rows of `rect`, one entry per column of `rect`.
/// Columns without a usable sample are NaN.
#[instrument(level = "debug", skip(view, levels))]
pub fn average_x_section<T: Scalar>(view: &RasterView<'_, T>, rect: &IndexRect, levels: Option<&Lut>) -> Vec<f64> {
    let rect = rect.clamped(view.width(), view.height());
    (rect.x0..rect.x1)
        .map(|x| {
            let avg = mean((rect.y0..rect.y1).filter_map(|y| view.value(x, y)));
            leveled(avg, levels)
        })
        .collect()
}

/// Per-row mean over the columns of `rect`.
#[instrument(level = "debug", skip(view, levels))]
pub fn average_y_section<T: Scalar>(view: &RasterView<'_, T>, rect: &IndexRect, levels: Option<&Lut>) -> Vec<f64> {
    let rect = rect.clamped(view.width(), view.height());
    (rect.y0..rect.y1)
        .map(|y| {
            let avg = mean((rect.x0..rect.x1).filter_map(|x| view.value(x, y)));
            leveled(avg, levels)
        })
        .collect()
}
