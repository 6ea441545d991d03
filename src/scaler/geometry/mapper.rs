use crate::scaler::geometry::affine::Affine;
use crate::scaler::geometry::axes::XyAxes;
use crate::scaler::geometry::rect::{DstRect, SrcRect};

/// Destination pixel index -> fractional source raster index.
///
/// Results may fall outside the raster or be NaN; the kernels treat those as
/// "no sample".
pub trait Mapper: Sync {
    fn map(&self, px: f64, py: f64) -> (f64, f64);
}

/// How destination pixels relate to the source raster for one call.
#[derive(Debug, Clone, Copy)]
pub enum Geometry<'a> {
    /// Axis-aligned map derived from the source and destination rectangles.
    Linear,
    /// `matrix` applied to `(px, py, 1)`; with `axes` the result is a data
    /// coordinate resolved through the lookups, otherwise it is already a
    /// raster index. The source rectangle plays no part in this mode.
    Transform {
        matrix: Affine,
        axes: Option<XyAxes<'a>>,
    },
}

impl Default for Geometry<'_> {
    fn default() -> Self {
        Geometry::Linear
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LinearMapper {
    src_x0: f64,
    src_y0: f64,
    dst_x0: f64,
    dst_y0: f64,
    ax: f64,
    ay: f64,
}

impl LinearMapper {
    pub fn from_rects(src: &SrcRect, dst: &DstRect) -> Self {
        Self {
            src_x0: src.x0,
            src_y0: src.y0,
            dst_x0: dst.x0 as f64,
            dst_y0: dst.y0 as f64,
            ax: (src.x1 - src.x0) / (dst.x1 - dst.x0) as f64,
            ay: (src.y1 - src.y0) / (dst.y1 - dst.y0) as f64,
        }
    }
}

impl Mapper for LinearMapper {
    #[inline]
    fn map(&self, px: f64, py: f64) -> (f64, f64) {
        (
            self.src_x0 + (px - self.dst_x0) * self.ax,
            self.src_y0 + (py - self.dst_y0) * self.ay,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TransformMapper<'a> {
    matrix: Affine,
    axes: Option<XyAxes<'a>>,
}

impl<'a> TransformMapper<'a> {
    pub fn new(matrix: Affine, axes: Option<XyAxes<'a>>) -> Self {
        Self { matrix, axes }
    }
}

impl Mapper for TransformMapper<'_> {
    #[inline]
    fn map(&self, px: f64, py: f64) -> (f64, f64) {
        let (u, v) = self.matrix.apply(px, py);
        match &self.axes {
            Some(axes) => axes.index_of(u, v),
            None => (u, v),
        }
    }
}

/// Source pixels covered by one destination pixel, measured at the centre of
/// `dst` along both destination axes. Non-finite results collapse to 1.
pub fn footprint<M: Mapper>(mapper: &M, dst: &DstRect) -> f64 {
    let cx = (dst.x0 as f64 + dst.x1 as f64) / 2.0;
    let cy = (dst.y0 as f64 + dst.y1 as f64) / 2.0;
    let (x, y) = mapper.map(cx, cy);
    let (xh, yh) = mapper.map(cx + 1.0, cy);
    let (xv, yv) = mapper.map(cx, cy + 1.0);
    let step = (xh - x).hypot(yh - y).max((xv - x).hypot(yv - y));
    if step.is_finite() { step } else { 1.0 }
}
