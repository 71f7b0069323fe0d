//! # batsmith app
//!
//! Command line inspector for the segmentation engine: loads a model,
//! segments it and prints a per-region report.
//!
//! - [`CliArgs`] - clap argument definitions
//! - [`run`] - Load config and model, segment, apply style flags
//! - [`Report`] - Text report of a [`Segmentation`](batsmith_segment::Segmentation)

mod app;
mod args;
mod error;
mod report;

pub use app::{ModelFormat, load_config, load_model, parse_model, run, segment_scene};
pub use args::CliArgs;
pub use error::AppError;
pub use report::Report;

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
pub fn init() {
    log::info!("batsmith v{} initialized", VERSION);
}
