//! # batsmith core
//!
//! Geometry buffers, bounds, merge/extract utilities, the typed scene tree and
//! model loaders used by the batsmith region segmentation engine.

#[cfg(feature = "gltf")]
pub mod gltf;
pub mod math;
pub mod mesh;
#[cfg(feature = "obj")]
pub mod obj;
pub mod scene;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core library version.
pub fn init() {
    log::info!("batsmith core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
