/// Half-open rectangle of raster indices, `[x0, x1) x [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl IndexRect {
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Covers every pixel touched by the fractional index rectangle: the top
    /// left corner is floored, the bottom right one ceiled, and both are
    /// clamped to a `width x height` raster. Corners may come in any order.
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64, width: usize, height: usize) -> Self {
        let clamp = |v: f64, dim: usize| {
            if v.is_nan() || v <= 0.0 {
                0
            } else {
                (v as usize).min(dim)
            }
        };
        Self {
            x0: clamp(x0.min(x1).floor(), width),
            y0: clamp(y0.min(y1).floor(), height),
            x1: clamp(x0.max(x1).ceil(), width),
            y1: clamp(y0.max(y1).ceil(), height),
        }
    }

    pub fn width(&self) -> usize {
        self.x1.saturating_sub(self.x0)
    }

    pub fn height(&self) -> usize {
        self.y1.saturating_sub(self.y0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Intersection with a `width x height` raster.
    pub fn clamped(&self, width: usize, height: usize) -> Self {
        Self {
            x0: self.x0.min(width),
            y0: self.y0.min(height),
            x1: self.x1.min(width),
            y1: self.y1.min(height),
        }
    }
}
