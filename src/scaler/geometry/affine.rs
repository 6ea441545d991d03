use std::ops::Mul;

use crate::scaler::geometry::rect::{DstRect, SrcRect};

/// 3x3 transform acting on column vectors `(x, y, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub m: [[f64; 3]; 3],
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation by `angle` radians around `(cx, cy)`.
    pub fn rotation_about(angle: f64, cx: f64, cy: f64) -> Self {
        Self::translation(cx, cy) * Self::rotation(angle) * Self::translation(-cx, -cy)
    }

    /// Axis-aligned map taking destination pixel indices onto `src`, the
    /// matrix form of the rectangle mapping.
    pub fn from_rects(src: &SrcRect, dst: &DstRect) -> Self {
        let sx = (src.x1 - src.x0) / (dst.x1 - dst.x0) as f64;
        let sy = (src.y1 - src.y0) / (dst.y1 - dst.y0) as f64;
        Self::new([
            [sx, 0.0, src.x0 - dst.x0 as f64 * sx],
            [0.0, sy, src.y0 - dst.y0 as f64 * sy],
            [0.0, 0.0, 1.0],
        ])
    }

    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.m;
        let u = m[0][0] * x + m[0][1] * y + m[0][2];
        let v = m[1][0] * x + m[1][1] * y + m[1][2];
        let w = m[2][0] * x + m[2][1] * y + m[2][2];
        if w == 1.0 { (u, v) } else { (u / w, v / w) }
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse matrix, `None` when singular.
    pub fn inverse(&self) -> Option<Affine> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let m = &self.m;
        let mut inv = [[0.0; 3]; 3];
        for (r, row) in inv.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                // cofactor of (c, r), transposed
                let (r0, r1) = match c { 0 => (1, 2), 1 => (0, 2), _ => (0, 1) };
                let (c0, c1) = match r { 0 => (1, 2), 1 => (0, 2), _ => (0, 1) };
                let minor = m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0];
                let sign = if (r + c) % 2 == 0 { 1.0 } else { -1.0 };
                *cell = sign * minor / det;
            }
        }
        Some(Affine::new(inv))
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine {
    type Output = Affine;

    /// Matrix product: `(a * b).apply(p) == a.apply(b.apply(p))`.
    fn mul(self, rhs: Affine) -> Affine {
        let mut out = [[0.0; 3]; 3];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[r][k] * rhs.m[k][c]).sum();
            }
        }
        Affine::new(out)
    }
}
