use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::scaler::common::error::{Result, ScalerError};
use crate::scaler::raster::{RasterView, Scalar};

/// Binned counts. Bin `i` covers `[edges[i], edges[i+1])`; the last bin is
/// closed on both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub counts: Vec<u32>,
    pub edges: Vec<f64>,
}

impl Histogram {
    /// Zero counts over `[0, 1]`, used when no finite unmasked sample exists.
    pub fn empty(n_bins: usize) -> Self {
        Self {
            counts: vec![0; n_bins],
            edges: linspace(0.0, 1.0, n_bins),
        }
    }

    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// `ln(count + 1)` per bin, for log-scaled display.
    pub fn log_counts(&self) -> Vec<f64> {
        self.counts.iter().map(|&c| (c as f64 + 1.0).ln()).collect()
    }
}

// Weighted form stays finite when `hi - lo` overflows.
fn linspace(lo: f64, hi: f64, n_bins: usize) -> Vec<f64> {
    let mut edges: Vec<f64> = (0..n_bins)
        .map(|i| {
            let t = i as f64 / n_bins as f64;
            lo * (1.0 - t) + hi * t
        })
        .collect();
    edges.push(hi);
    edges
}

#[inline]
fn bin_of(v: f64, lo: f64, hi: f64, edges: &[f64]) -> usize {
    let n = edges.len() - 1;
    // halved operands keep the span finite
    let mut i = ((v * 0.5 - lo * 0.5) / (hi * 0.5 - lo * 0.5) * n as f64) as usize;
    if i >= n {
        i = n - 1;
    }
    // The scaled guess can land one bin off next to an edge; the edges decide.
    if v < edges[i] {
        i -= 1;
    } else if i + 1 < n && v >= edges[i + 1] {
        i += 1;
    }
    i
}

/// Computes `n_bins` equally spaced bins between the finite unmasked min and max.
#[instrument(skip(view), fields(width = view.width(), height = view.height()))]
pub fn compute_histogram<T: Scalar>(view: &RasterView<'_, T>, n_bins: u32) -> Result<Histogram> {
    if n_bins == 0 {
        return Err(ScalerError::InvalidBinCount(n_bins));
    }
    let n = n_bins as usize;

    let range = (0..view.height())
        .into_par_iter()
        .map(|y| {
            view.row_values(y)
                .filter(|v| v.is_finite())
                .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                    Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                    None => Some((v, v)),
                })
        })
        .reduce(
            || None,
            |a, b| match (a, b) {
                (Some((a0, a1)), Some((b0, b1))) => Some((a0.min(b0), a1.max(b1))),
                (a, None) => a,
                (None, b) => b,
            },
        );

    let Some((mut lo, mut hi)) = range else {
        debug!("No finite samples, returning empty histogram");
        return Ok(Histogram::empty(n));
    };
    if lo == hi {
        // +-0.5 vanishes past 2^52; widen by one epsilon of the value there
        let delta = 0.5f64.max(lo.abs() * f64::EPSILON);
        lo = (lo - delta).max(f64::MIN);
        hi = (hi + delta).min(f64::MAX);
    }
    let edges = linspace(lo, hi, n);

    let counts = (0..view.height())
        .into_par_iter()
        .fold(
            || vec![0u32; n],
            |mut acc, y| {
                for v in view.row_values(y).filter(|v| v.is_finite()) {
                    acc[bin_of(v, lo, hi, &edges)] += 1;
                }
                acc
            },
        )
        .reduce(
            || vec![0u32; n],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        );

    debug!(lo, hi, n_bins, "Histogram computed");
    Ok(Histogram { counts, edges })
}
