use tracing::trace;

use crate::scaler::common::error::Result;
use crate::scaler::lut::colormap::ColorTable;

/// Number of entries in every lookup table.
pub const LUT_SIZE: usize = 1024;
/// Highest LUT index, as a float for the level transform.
pub const LUT_MAX: f64 = (LUT_SIZE - 1) as f64;
/// Fully transparent ARGB pixel.
pub const TRANSPARENT: u32 = 0x0000_0000;

/// Converts an opacity in `[0, 1]` into the alpha byte `round(255 * alpha)`.
#[inline]
pub fn alpha_byte(alpha: f64) -> u32 {
    let a = (255.0 * alpha).round();
    if a >= 255.0 {
        255
    } else if a > 0.0 {
        a as u32
    } else {
        0
    }
}

/// Level transform plus the ARGB table it indexes.
///
/// The level range only touches `scale`/`offset`; the table is rebuilt when
/// the color table, alpha or alpha policy change.
#[derive(Debug, Clone)]
pub struct Lut {
    min: f64,
    max: f64,
    scale: f64,
    offset: f64,
    background: Option<u32>,
    colors: ColorTable,
    alpha: f64,
    alpha_is_mask: bool,
    table: Vec<u32>,
}

impl Lut {
    pub fn new(min: f64, max: f64, colors: ColorTable, alpha: f64, alpha_is_mask: bool) -> Self {
        let mut lut = Self {
            min,
            max,
            scale: 1.0,
            offset: 0.0,
            background: None,
            colors,
            alpha,
            alpha_is_mask,
            table: vec![TRANSPARENT; LUT_SIZE],
        };
        lut.set_range(min, max);
        lut.rebuild_table();
        lut
    }

    /// Re-derives `scale`/`offset` so that `min -> 0` and `max -> 1023`.
    pub fn set_range(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
        if min == max {
            self.scale = LUT_MAX;
            self.offset = min;
        } else {
            self.scale = LUT_MAX / (max - min);
            // -min*scale rather than -LUT_MAX*min/(max-min): stays finite when
            // the span overflows to infinity.
            self.offset = -min * self.scale;
        }
        trace!(min, max, scale = self.scale, offset = self.offset, "LUT range updated");
    }

    pub fn set_color_table(&mut self, colors: ColorTable) {
        self.colors = colors;
        self.rebuild_table();
    }

    pub fn set_alpha(&mut self, alpha: f64, alpha_is_mask: bool) {
        self.alpha = alpha;
        self.alpha_is_mask = alpha_is_mask;
        self.rebuild_table();
    }

    pub fn set_background(&mut self, background: Option<u32>) {
        self.background = background;
    }

    fn rebuild_table(&mut self) {
        let uniform = alpha_byte(self.alpha) << 24;
        for (i, (dst, &rgb)) in self.table.iter_mut().zip(self.colors.entries()).enumerate() {
            let alpha = if self.alpha_is_mask {
                alpha_byte(self.alpha * (i as f64 / LUT_MAX)) << 24
            } else {
                uniform
            };
            *dst = (rgb & 0x00FF_FFFF) | alpha;
        }
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn alpha_is_mask(&self) -> bool {
        self.alpha_is_mask
    }

    pub fn background(&self) -> Option<u32> {
        self.background
    }

    pub fn color_table(&self) -> &ColorTable {
        &self.colors
    }

    /// The 1024 ARGB entries.
    pub fn table(&self) -> &[u32] {
        &self.table
    }

    /// Pixel written where no sample exists (masked, NaN, out of range).
    #[inline]
    pub fn no_value_pixel(&self) -> u32 {
        self.background.unwrap_or(TRANSPARENT)
    }

    /// `clamp(round(v*scale + offset), 0, 1023)`. Callers filter NaN first.
    #[inline]
    pub fn index(&self, v: f64) -> usize {
        let i = (v * self.scale + self.offset).round();
        if i >= LUT_MAX {
            LUT_SIZE - 1
        } else if i > 0.0 {
            i as usize
        } else {
            0
        }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> u32 {
        self.table[self.index(v)]
    }

    /// Level transform without quantization, `clamp(v*scale + offset, 0, 1023)`.
    #[inline]
    pub fn level(&self, v: f64) -> f64 {
        (v * self.scale + self.offset).clamp(0.0, LUT_MAX)
    }

    /// Sample value that maps exactly onto `index`.
    pub fn value_of(&self, index: usize) -> f64 {
        (index as f64 - self.offset) / self.scale
    }
}

/// Builds a LUT from a raw 1024-entry RGB table.
pub fn build_lut(
    min: f64,
    max: f64,
    color_table: &[u32],
    alpha: f64,
    alpha_is_mask: bool,
) -> Result<Lut> {
    let colors = ColorTable::from_vec(color_table.to_vec())?;
    Ok(Lut::new(min, max, colors, alpha, alpha_is_mask))
}
