//! # batsmith segment
//!
//! Splits a loaded bat model into independently colorable regions.
//!
//! ## Overview
//!
//! - [`Segmenter`] - Runs the pipeline on a [`Scene`](batsmith_core::scene::Scene)
//! - [`Segmentation`] - Region geometries, object bounds and style tags
//! - [`SegmentationConfig`] - Cut fractions and name keywords, loadable from TOML
//! - [`Region`] / [`RegionMap`] - Region labels and their geometry
//!
//! Two strategies produce the base regions. When the scene names its handle
//! and barrel nodes, those are used directly and the knob is cut from the
//! handle's tip. Otherwise the geometry is partitioned along its longest
//! axis into knob (tip), handle (mid) and barrel (base) zones. In both cases
//! the knob's end cap is then split off as the knob face.
//!
//! ## Example
//!
//! ```ignore
//! use batsmith_segment::{Region, Segmenter, SegmentationConfig};
//!
//! let mut scene = batsmith_core::obj::load_obj(&bytes)?;
//! let result = Segmenter::new(SegmentationConfig::default()).segment(&mut scene)?;
//! if let Some(barrel) = result.region(Region::Barrel) {
//!     println!("barrel: {} triangles", barrel.triangle_count());
//! }
//! ```

pub mod axis;
pub mod config;
mod error;
pub mod face;
pub mod inventory;
pub mod named;
mod orchestrator;
pub mod partition;
mod region;

pub use config::SegmentationConfig;
pub use error::{ConfigError, SegmentError};
pub use orchestrator::{
    Segmentation, SegmentationPath, SegmentationState, SegmentWarning, Segmenter,
};
pub use region::{
    ObjectBounds, Region, RegionMap, RegionStyles, STANDARD_SCALE, TORPEDO_SCALE, UnknownRegion,
};

/// Segment library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the segment library version.
pub fn init() {
    log::info!("batsmith segment v{} initialized", VERSION);
}
