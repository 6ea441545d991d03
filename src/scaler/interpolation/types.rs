//! Interpolation mode and kernel result types

/// Interpolation mode, selected per draw/export call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    Nearest,
    #[default]
    Linear,
    /// Unweighted mean over an `n x n` window. `None` derives `n` from the
    /// source/destination scale ratio.
    AntiAliased { size: Option<usize> },
}

/// Outcome of sampling one source coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Value(f64),
    /// Every contributing sample is masked or NaN.
    Masked,
    /// The coordinate lies outside `[-0.5, dim-0.5)` on some axis.
    OutOfBounds,
}

impl Sample {
    pub fn value(self) -> Option<f64> {
        match self {
            Sample::Value(v) if !v.is_nan() => Some(v),
            _ => None,
        }
    }
}
