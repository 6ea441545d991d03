//! Serializable LUT settings
//!
//! The persistence layer only needs to round-trip plain scalars and arrays;
//! a [`Lut`] is always rebuilt from these on load.

use serde::{Deserialize, Serialize};

use crate::scaler::common::error::Result;
use crate::scaler::lut::colormap::ColorTable;
use crate::scaler::lut::table::Lut;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColormapSpec {
    Named(String),
    Inline(Vec<u32>),
}

impl ColormapSpec {
    pub fn resolve(&self) -> Result<ColorTable> {
        match self {
            ColormapSpec::Named(name) => ColorTable::named(name),
            ColormapSpec::Inline(entries) => ColorTable::from_vec(entries.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LutParams {
    pub min: f64,
    pub max: f64,
    pub colormap: ColormapSpec,
    pub alpha: f64,
    pub alpha_is_mask: bool,
    #[serde(default)]
    pub background: Option<u32>,
}

impl Default for LutParams {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 255.0,
            colormap: ColormapSpec::Named("gray".to_string()),
            alpha: 1.0,
            alpha_is_mask: false,
            background: None,
        }
    }
}

impl LutParams {
    /// Captures a LUT's settings, storing its table inline.
    pub fn from_lut(lut: &Lut) -> Self {
        let (min, max) = lut.range();
        Self {
            min,
            max,
            colormap: ColormapSpec::Inline(lut.color_table().entries().to_vec()),
            alpha: lut.alpha(),
            alpha_is_mask: lut.alpha_is_mask(),
            background: lut.background(),
        }
    }

    pub fn build(&self) -> Result<Lut> {
        let colors = self.colormap.resolve()?;
        let mut lut = Lut::new(self.min, self.max, colors, self.alpha, self.alpha_is_mask);
        lut.set_background(self.background);
        Ok(lut)
    }
}
