//! Prediction service: runs one case through the model and wraps the
//! result for display.

use std::sync::Arc;

use crate::domain::{CaseRecord, Prediction};
use crate::ports::SeverityModel;
use crate::FaerscopeError;

/// Service for running severity predictions.
///
/// Holds the artifact-backed model behind its port, so the UI and tests
/// can run against mock artifacts. The model is loaded once at startup
/// and shared read-only; the service itself keeps no state between calls.
pub struct PredictionService<M: SeverityModel> {
    model: Arc<M>,
}

impl<M: SeverityModel> PredictionService<M> {
    /// Create a new prediction service over a loaded model.
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    /// Run the pipeline for one submitted case.
    ///
    /// # Errors
    /// Propagates any pipeline contract violation unrecovered; there is no
    /// retry or fallback for a record/artifact mismatch.
    pub fn predict(&self, record: CaseRecord) -> Result<Prediction, FaerscopeError> {
        let outcome = self.model.predict(&record)?;
        let prediction = Prediction::new(record, outcome);

        tracing::info!(
            outcome = %prediction.outcome,
            label = prediction.outcome.label(),
            drug = record.drug.code(),
            continent = %record.continent,
            "prediction complete"
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Continent, Dechallenge, Drug, IndicationCategory, OrganClass, OutcomeCode, Rechallenge,
        Sex,
    };
    use crate::ports::ModelError;

    struct FixedModel(OutcomeCode);

    impl SeverityModel for FixedModel {
        fn predict(&self, _record: &CaseRecord) -> Result<OutcomeCode, ModelError> {
            Ok(self.0)
        }
    }

    struct FailingModel;

    impl SeverityModel for FailingModel {
        fn predict(&self, _record: &CaseRecord) -> Result<OutcomeCode, ModelError> {
            Err(ModelError::LabelIndex(9))
        }
    }

    fn sample_record() -> CaseRecord {
        CaseRecord {
            drug: Drug::Metformin,
            age_years: 45,
            sex: Sex::Male,
            continent: Continent::NorthAmerica,
            indication: IndicationCategory::Diabetes,
            dechallenge: Dechallenge::Improved,
            rechallenge: Rechallenge::No,
            organ_class: OrganClass::Cardiac,
        }
    }

    #[test]
    fn test_prediction_wraps_outcome() {
        let service = PredictionService::new(Arc::new(FixedModel(OutcomeCode::Disability)));
        let prediction = service.predict(sample_record()).expect("should predict");

        assert_eq!(prediction.outcome, OutcomeCode::Disability);
        assert_eq!(prediction.outcome.label(), "Disability");
        assert_eq!(prediction.record, sample_record());
    }

    #[test]
    fn test_model_error_is_fatal() {
        let service = PredictionService::new(Arc::new(FailingModel));
        assert!(service.predict(sample_record()).is_err());
    }
}
