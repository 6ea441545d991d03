//! Snapshot module
//!
//! Renders a layer region at a requested size into a freshly allocated
//! buffer and writes it out as TIFF.

mod types;
mod writer;
mod standard_tiff_writer;
mod pipeline;


pub use types::{ArgbImage, ValueImage, TiffCompression, SnapshotConfig, SnapshotConfigBuilder};
pub use writer::SnapshotWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use pipeline::SnapshotPipeline;
