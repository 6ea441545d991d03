use rayon::prelude::*;
use tracing::instrument;

use crate::scaler::analysis::rect::IndexRect;
use crate::scaler::raster::{RasterView, Scalar};

/// Summary of the usable samples inside a region. `std` is the population
/// standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
    pub sum: f64,
}

#[derive(Clone, Copy)]
struct Acc {
    count: usize,
    min: f64,
    max: f64,
    sum: f64,
}

impl Acc {
    const EMPTY: Acc = Acc {
        count: 0,
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
        sum: 0.0,
    };

    fn push(mut self, v: f64) -> Self {
        self.count += 1;
        self.min = self.min.min(v);
        self.max = self.max.max(v);
        self.sum += v;
        self
    }

    fn merge(self, other: Acc) -> Self {
        Acc {
            count: self.count + other.count,
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            sum: self.sum + other.sum,
        }
    }
}

/// Statistics over the unmasked, non-NaN samples of `rect`; `None` when the
/// region holds none.
#[instrument(level = "debug", skip(view))]
pub fn region_stats<T: Scalar>(view: &RasterView<'_, T>, rect: &IndexRect) -> Option<RegionStats> {
    let rect = rect.clamped(view.width(), view.height());
    let (x0, x1) = (rect.x0, rect.x1);
    let row = |y: usize| view.row_values_in(y, x0, x1);

    let acc = (rect.y0..rect.y1)
        .into_par_iter()
        .map(|y| row(y).fold(Acc::EMPTY, Acc::push))
        .reduce(|| Acc::EMPTY, Acc::merge);
    if acc.count == 0 {
        return None;
    }
    let mean = acc.sum / acc.count as f64;

    // two-pass variance
    let sq: f64 = (rect.y0..rect.y1)
        .into_par_iter()
        .map(|y| row(y).map(|v| (v - mean) * (v - mean)).sum::<f64>())
        .sum();

    Some(RegionStats {
        count: acc.count,
        min: acc.min,
        max: acc.max,
        mean,
        std: (sq / acc.count as f64).sqrt(),
        sum: acc.sum,
    })
}
