//! Color tables and the built-in named colormaps

use crate::scaler::common::error::{Result, ScalerError};
use crate::scaler::lut::table::{LUT_MAX, LUT_SIZE};

/// Names accepted by [`ColorTable::named`].
pub const COLORMAP_NAMES: &[&str] = &["gray", "gray_r", "jet", "hot", "cool", "viridis"];

type Stop = (f64, [u8; 3]);

const GRAY: &[Stop] = &[(0.0, [0, 0, 0]), (1.0, [255, 255, 255])];
const GRAY_R: &[Stop] = &[(0.0, [255, 255, 255]), (1.0, [0, 0, 0])];
const JET: &[Stop] = &[
    (0.0, [0, 0, 128]),
    (0.125, [0, 0, 255]),
    (0.375, [0, 255, 255]),
    (0.625, [255, 255, 0]),
    (0.875, [255, 0, 0]),
    (1.0, [128, 0, 0]),
];
const HOT: &[Stop] = &[
    (0.0, [0, 0, 0]),
    (0.375, [255, 0, 0]),
    (0.75, [255, 255, 0]),
    (1.0, [255, 255, 255]),
];
const COOL: &[Stop] = &[(0.0, [0, 255, 255]), (1.0, [255, 0, 255])];
const VIRIDIS: &[Stop] = &[
    (0.0, [68, 1, 84]),
    (0.25, [59, 82, 139]),
    (0.5, [33, 145, 140]),
    (0.75, [94, 201, 98]),
    (1.0, [253, 231, 37]),
];

/// Exactly [`LUT_SIZE`] RGB entries (`0x00RRGGBB`; any alpha bits are ignored).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable(Vec<u32>);

impl ColorTable {
    pub fn from_vec(entries: Vec<u32>) -> Result<Self> {
        if entries.len() != LUT_SIZE {
            return Err(ScalerError::ColorTableSize {
                expected: LUT_SIZE,
                actual: entries.len(),
            });
        }
        Ok(Self(entries))
    }

    pub fn named(name: &str) -> Result<Self> {
        let stops = match name {
            "gray" => GRAY,
            "gray_r" => GRAY_R,
            "jet" => JET,
            "hot" => HOT,
            "cool" => COOL,
            "viridis" => VIRIDIS,
            other => return Err(ScalerError::UnknownColormap(other.to_string())),
        };
        Ok(Self::from_stops(stops))
    }

    pub fn gray() -> Self {
        Self::from_stops(GRAY)
    }

    /// Linear interpolation between `(position, rgb)` stops sorted by position in `[0, 1]`.
    fn from_stops(stops: &[Stop]) -> Self {
        let entries = (0..LUT_SIZE)
            .map(|i| {
                let t = i as f64 / LUT_MAX;
                let seg = stops
                    .windows(2)
                    .find(|w| t <= w[1].0)
                    .unwrap_or(&stops[stops.len() - 2..]);
                let (t0, c0) = seg[0];
                let (t1, c1) = seg[1];
                let f = if t1 > t0 { ((t - t0) / (t1 - t0)).clamp(0.0, 1.0) } else { 0.0 };
                let channel = |k: usize| {
                    let a = c0[k] as f64;
                    let b = c1[k] as f64;
                    (a + (b - a) * f).round() as u32
                };
                (channel(0) << 16) | (channel(1) << 8) | channel(2)
            })
            .collect();
        Self(entries)
    }

    pub fn entries(&self) -> &[u32] {
        &self.0
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::gray()
    }
}
