//! Severity model port: trait for the artifact-backed prediction pipeline.
//!
//! Abstracting the pipeline behind a trait keeps the TUI and the
//! application service testable against mock artifacts.

use crate::domain::{CaseRecord, OutcomeCode};

/// Errors from the model pipeline. All of these indicate a broken contract
/// between the assembled record and the fitted artifacts; none are
/// recoverable at request time.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read artifact {path:?}: {source}")]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path:?}: {source}")]
    Parse {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("digest mismatch for artifact file {0}")]
    DigestMismatch(String),

    #[error("encoder column order mismatch: expected {expected:?}, artifact has {actual:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("column {column} is missing category {value:?} the form can emit")]
    MissingCategory { column: String, value: String },

    #[error("unknown category {value:?} for column {column}")]
    UnknownCategory { column: String, value: String },

    #[error("shape mismatch in {stage}: expected {expected}, got {actual}")]
    Shape {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("predicted class index {0} outside label encoder range")]
    LabelIndex(usize),

    #[error("label encoder class {0:?} has no outcome mapping")]
    UnmappedLabel(String),
}

/// Trait for running one severity prediction.
///
/// Implementations are immutable after construction and safe to share;
/// prediction holds no state between calls.
pub trait SeverityModel: Send + Sync {
    /// Predict the seriousness outcome for one case record.
    ///
    /// # Errors
    /// Returns [`ModelError`] on any contract violation between the record
    /// and the fitted artifacts.
    fn predict(&self, record: &CaseRecord) -> Result<OutcomeCode, ModelError>;
}
