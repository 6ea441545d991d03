/// Source rectangle `(x0, y0, x1, y1)` in raster index coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrcRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl SrcRect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Whole `width x height` raster: sample `i` covers `[i-0.5, i+0.5)`.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(-0.5, -0.5, width as f64 - 0.5, height as f64 - 0.5)
    }
}

impl From<(f64, f64, f64, f64)> for SrcRect {
    fn from((x0, y0, x1, y1): (f64, f64, f64, f64)) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// Destination rectangle `(x0, y0, x1, y1)` in buffer pixels, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl DstRect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle covering a whole `width x height` buffer. Sizes beyond
    /// `i32::MAX` saturate, which the buffer bounds check then rejects.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(
            0,
            0,
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        )
    }

    pub fn width(&self) -> i64 {
        self.x1 as i64 - self.x0 as i64
    }

    pub fn height(&self) -> i64 {
        self.y1 as i64 - self.y0 as i64
    }

    /// Zero or negative width/height.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

impl From<(i32, i32, i32, i32)> for DstRect {
    fn from((x0, y0, x1, y1): (i32, i32, i32, i32)) -> Self {
        Self { x0, y0, x1, y1 }
    }
}
