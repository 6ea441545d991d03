use crate::scaler::interpolation::Interpolation;

/// How [`ImageLayer::export_roi`](crate::scaler::layer::ImageLayer::export_roi)
/// resamples. The default exports raw samples: no LUT, nearest lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Pass values through the LUT level transform
    pub apply_lut: bool,
    /// Use the layer's display interpolation instead of nearest
    pub apply_interpolation: bool,
    /// Overrides both of the above interpolation choices
    pub force_interpolation: Option<Interpolation>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_lut(mut self, apply: bool) -> Self {
        self.apply_lut = apply;
        self
    }

    pub fn apply_interpolation(mut self, apply: bool) -> Self {
        self.apply_interpolation = apply;
        self
    }

    pub fn force_interpolation(mut self, interpolation: Option<Interpolation>) -> Self {
        self.force_interpolation = interpolation;
        self
    }

    /// Interpolation actually used for a layer displayed with `display`.
    pub fn interpolation(&self, display: Interpolation) -> Interpolation {
        match self.force_interpolation {
            Some(forced) => forced,
            None if self.apply_interpolation => display,
            None => Interpolation::Nearest,
        }
    }
}
