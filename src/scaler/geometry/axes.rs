use crate::scaler::common::error::{Result, ScalerError};

/// Monotonic coordinate lookup for one raster axis.
///
/// Holds either `dim` sample centres or `dim + 1` pixel edges. Values are
/// resolved to fractional indices by binary search plus linear interpolation
/// between the bracketing entries; beyond either end the end segment's
/// spacing is extrapolated.
#[derive(Debug, Clone, Copy)]
pub struct AxisLookup<'a> {
    coords: &'a [f64],
    edges: bool,
}

impl<'a> AxisLookup<'a> {
    pub fn new(axis: &'static str, coords: &'a [f64], dim: usize) -> Result<Self> {
        let edges = if coords.len() == dim {
            false
        } else if coords.len() == dim + 1 {
            true
        } else {
            return Err(ScalerError::AxisLength {
                axis,
                dim,
                actual: coords.len(),
            });
        };
        if let Some(index) = coords.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(ScalerError::NonMonotonicAxis {
                axis,
                index: index + 1,
            });
        }
        Ok(Self { coords, edges })
    }

    pub fn coords(&self) -> &'a [f64] {
        self.coords
    }

    pub fn is_edges(&self) -> bool {
        self.edges
    }

    /// Fractional index of coordinate `u`; NaN in, NaN out.
    #[inline]
    pub fn index_of(&self, u: f64) -> f64 {
        let c = self.coords;
        let shift = if self.edges { 0.5 } else { 0.0 };
        match c.len() {
            0 => f64::NAN,
            1 => u - c[0] - shift,
            n => {
                let k = c.partition_point(|&v| v <= u).saturating_sub(1).min(n - 2);
                let frac = (u - c[k]) / (c[k + 1] - c[k]);
                k as f64 + frac - shift
            }
        }
    }
}

/// Per-column x and per-row y lookups of an irregular grid.
#[derive(Debug, Clone, Copy)]
pub struct XyAxes<'a> {
    pub x: AxisLookup<'a>,
    pub y: AxisLookup<'a>,
}

impl<'a> XyAxes<'a> {
    pub fn new(x: &'a [f64], y: &'a [f64], width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            x: AxisLookup::new("x", x, width)?,
            y: AxisLookup::new("y", y, height)?,
        })
    }

    #[inline]
    pub fn index_of(&self, u: f64, v: f64) -> (f64, f64) {
        (self.x.index_of(u), self.y.index_of(v))
    }
}
