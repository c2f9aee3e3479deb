//! Ports layer: trait definitions at the application boundary.
//!
//! Following Hexagonal Architecture, the single port here separates the
//! application and UI from the concrete artifact-backed pipeline.

mod model;

pub use model::{ModelError, SeverityModel};
