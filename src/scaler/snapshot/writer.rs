use std::io::Write;

use crate::scaler::common::error::Result;
use crate::scaler::snapshot::types::{ArgbImage, SnapshotConfig, ValueImage};

pub trait SnapshotWriter {
    fn write_argb(&self, image: &ArgbImage, output: &mut dyn Write, config: &SnapshotConfig) -> Result<()>;
    fn write_values(&self, image: &ValueImage, output: &mut dyn Write, config: &SnapshotConfig) -> Result<()>;
}
