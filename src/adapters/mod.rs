//! Adapters layer: concrete implementations behind the ports.
//!
//! - `artifacts`: the five fitted model artifacts and the pipeline over them
//! - `sanitize`: identifier filtering for log output

pub mod artifacts;
pub mod sanitize;

pub use artifacts::ArtifactBundle;
