//! Application layer: use cases orchestrating domain and ports.

mod prediction;

pub use prediction::PredictionService;
