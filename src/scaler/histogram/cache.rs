use tracing::debug;

use crate::scaler::common::error::Result;
use crate::scaler::histogram::compute::{compute_histogram, Histogram};
use crate::scaler::raster::{RasterView, Scalar};

/// Anything that can produce a histogram for a requested bin count.
pub trait HistogramSource {
    fn histogram(&mut self, n_bins: u32) -> Result<Histogram>;
}

/// Last computed histogram, keyed by its bin count.
///
/// The owner must call [`invalidate`](Self::invalidate) whenever the raster
/// it was computed from is replaced.
#[derive(Debug, Default, Clone)]
pub struct HistogramCache {
    entry: Option<Histogram>,
}

impl HistogramCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn cached(&self, n_bins: u32) -> Option<&Histogram> {
        self.entry.as_ref().filter(|h| h.n_bins() == n_bins as usize)
    }

    pub fn get_or_compute<T: Scalar>(
        &mut self,
        view: &RasterView<'_, T>,
        n_bins: u32,
    ) -> Result<&Histogram> {
        let entry = match self.entry.take() {
            Some(hist) if hist.n_bins() == n_bins as usize => {
                debug!(n_bins, "Histogram cache hit");
                hist
            }
            _ => {
                debug!(n_bins, "Histogram cache miss");
                compute_histogram(view, n_bins)?
            }
        };
        Ok(self.entry.insert(entry))
    }
}

/// Histogram source over a plain sample slice, treated as a single row.
pub struct SliceSource<'a, T> {
    data: &'a [T],
    cache: HistogramCache,
}

impl<'a, T: Scalar> SliceSource<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            cache: HistogramCache::new(),
        }
    }
}

impl<T: Scalar> HistogramSource for SliceSource<'_, T> {
    fn histogram(&mut self, n_bins: u32) -> Result<Histogram> {
        let view = RasterView::new(self.data.len(), 1, self.data)?;
        self.cache.get_or_compute(&view, n_bins).cloned()
    }
}
