//! # Faerscope
//!
//! Adverse event severity prediction for antidiabetic drugs, trained on
//! the FDA FAERS database.
//!
//! This crate provides:
//! - A terminal form for entering patient and case details
//! - A deterministic inference pipeline over five pre-fitted model
//!   artifacts (encoder, scaler, PCA basis, classifier, label decoder)
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (case record, vocabularies, geography, outcomes)
//! - `ports`: Trait boundary for the severity model
//! - `adapters`: Artifact loading/pipeline, log sanitization
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{CaseRecord, OutcomeCode, Prediction};

/// Result type for Faerscope operations
pub type Result<T> = std::result::Result<T, FaerscopeError>;

/// Main error type for Faerscope
#[derive(Debug, thiserror::Error)]
pub enum FaerscopeError {
    #[error("model pipeline failed: {0}")]
    Model(#[from] ports::ModelError),

    #[error("invalid case input: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
