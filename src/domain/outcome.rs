//! Predicted outcome types.
//!
//! The classifier emits one of five FAERS seriousness codes; each maps to
//! a display label for the result screen.

use crate::domain::CaseRecord;

/// FAERS seriousness outcome code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeCode {
    /// DE
    Death,
    /// HO
    Hospitalization,
    /// DS
    Disability,
    /// LT
    LifeThreatening,
    /// OT
    Intervention,
}

impl OutcomeCode {
    pub const ALL: [Self; 5] = [
        Self::Death,
        Self::Hospitalization,
        Self::Disability,
        Self::LifeThreatening,
        Self::Intervention,
    ];

    /// The short code as stored in FAERS and in the label encoder.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Death => "DE",
            Self::Hospitalization => "HO",
            Self::Disability => "DS",
            Self::LifeThreatening => "LT",
            Self::Intervention => "OT",
        }
    }

    /// Human-readable outcome name shown on the result screen.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Death => "Death",
            Self::Hospitalization => "Hospitalization",
            Self::Disability => "Disability",
            Self::LifeThreatening => "Life-threatening",
            Self::Intervention => "Required Intervention",
        }
    }

    /// Parse a short code. `None` for anything outside the five known
    /// codes; callers treat that as a contract violation, not user error.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DE" => Some(Self::Death),
            "HO" => Some(Self::Hospitalization),
            "DS" => Some(Self::Disability),
            "LT" => Some(Self::LifeThreatening),
            "OT" => Some(Self::Intervention),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutcomeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One completed prediction: the outcome plus the record it was made for.
/// Display and logging only; nothing is persisted.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub record: CaseRecord,
    pub outcome: OutcomeCode,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Prediction {
    #[must_use]
    pub fn new(record: CaseRecord, outcome: OutcomeCode) -> Self {
        Self {
            record,
            outcome,
            created_at: chrono::Utc::now(),
        }
    }
}
