//! Analysis module
//!
//! Cross sections, averaged profiles and region statistics computed directly
//! on the raster samples.

mod rect;
mod sections;
mod stats;

#[cfg(test)]
mod tests;

pub use rect::IndexRect;
pub use sections::{average_x_section, average_y_section, x_section, y_section};
pub use stats::{region_stats, RegionStats};
