//! Domain layer: case records, vocabularies, geography, outcomes.
//!
//! Pure types with no I/O. Every categorical value here mirrors the
//! vocabulary the offline encoder was fitted on.

mod case;
pub mod geography;
mod outcome;

pub use case::{
    form_vocabulary, validate_age, AgeWarning, CaseRecord, Dechallenge, Drug,
    IndicationCategory, OrganClass, Rechallenge, Sex, AGE_MAX, AGE_MIN, CATEGORICAL_COLUMNS,
    NUMERIC_COLUMN,
};
pub use geography::{country_to_continent, Continent};
pub use outcome::{OutcomeCode, Prediction};
