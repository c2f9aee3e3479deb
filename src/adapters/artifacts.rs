//! Artifact adapter: loads the five pre-fitted model artifacts and runs
//! the prediction pipeline over them.
//!
//! The artifacts ship as JSON exported by the offline training pipeline:
//!
//! - `scaler.json`: per-column mean/scale for the numeric block
//! - `ohe_encoder.json`: ordered columns and per-column category lists
//! - `label_encoder.json`: ordered class codes
//! - `classifier.json`: linear decision layer over the PCA space
//! - `pca.json`: feature-space mean and component rows
//!
//! All five are immutable after load. `load()` cross-checks their shapes
//! against each other and against the form's vocabularies so that schema
//! drift fails at startup instead of silently misencoding.
//!
//! An optional `manifest.json` binds the artifact files to SHA-256
//! digests; when present, every digest must match.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{form_vocabulary, CaseRecord, OutcomeCode, CATEGORICAL_COLUMNS};
use crate::ports::{ModelError, SeverityModel};

const SCALER_FILE: &str = "scaler.json";
const ENCODER_FILE: &str = "ohe_encoder.json";
const LABELS_FILE: &str = "label_encoder.json";
const CLASSIFIER_FILE: &str = "classifier.json";
const PCA_FILE: &str = "pca.json";
const MANIFEST_FILE: &str = "manifest.json";

const ARTIFACT_FILES: [&str; 5] = [
    SCALER_FILE,
    ENCODER_FILE,
    LABELS_FILE,
    CLASSIFIER_FILE,
    PCA_FILE,
];

/// Standard scaler statistics for the numeric block (one column: age).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl NumericScaler {
    /// Scale the numeric column: `(x - mean) / scale`.
    ///
    /// # Errors
    /// Shape error if the scaler was not fitted on exactly one column.
    pub fn transform(&self, value: f64) -> Result<f64, ModelError> {
        if self.mean.len() != 1 || self.scale.len() != 1 {
            return Err(ModelError::Shape {
                stage: "scaler",
                expected: 1,
                actual: self.mean.len().max(self.scale.len()),
            });
        }
        Ok((value - self.mean[0]) / self.scale[0])
    }
}

/// One-hot encoder: ordered column names with per-column category lists,
/// exactly as fitted offline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoder {
    pub columns: Vec<String>,
    pub categories: Vec<Vec<String>>,
}

impl OneHotEncoder {
    /// Total width of the encoded block.
    #[must_use]
    pub fn width(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    /// Encode one value per column into the concatenated one-hot block.
    ///
    /// # Errors
    /// Shape error on a column-count mismatch; `UnknownCategory` when a
    /// value is outside the fitted vocabulary (a contract violation, since
    /// the form only emits closed-enum codes).
    pub fn transform(&self, values: &[&str]) -> Result<Vec<f64>, ModelError> {
        if values.len() != self.columns.len() {
            return Err(ModelError::Shape {
                stage: "one-hot encoder",
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        let mut encoded = Vec::with_capacity(self.width());
        for (col_idx, value) in values.iter().enumerate() {
            let categories = &self.categories[col_idx];
            let hot = categories.iter().position(|c| c == value).ok_or_else(|| {
                ModelError::UnknownCategory {
                    column: self.columns[col_idx].clone(),
                    value: (*value).to_string(),
                }
            })?;
            for i in 0..categories.len() {
                encoded.push(if i == hot { 1.0 } else { 0.0 });
            }
        }
        Ok(encoded)
    }
}

/// Label encoder: class codes in the fitted (sorted) order; the classifier
/// predicts indices into this list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Decode a class index back to its short code.
    ///
    /// # Errors
    /// `LabelIndex` when the classifier predicts outside the fitted range.
    pub fn decode(&self, index: usize) -> Result<&str, ModelError> {
        self.classes
            .get(index)
            .map(String::as_str)
            .ok_or(ModelError::LabelIndex(index))
    }
}

/// Linear decision layer fitted on the PCA space: one coefficient row and
/// intercept per class; prediction is the argmax of the class scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// Score the feature vector and return the winning class index.
    ///
    /// # Errors
    /// Shape error when the vector width does not match the fitted
    /// coefficient rows.
    pub fn predict(&self, features: &[f64]) -> Result<usize, ModelError> {
        let mut best: Option<(usize, f64)> = None;
        for (class_idx, row) in self.coefficients.iter().enumerate() {
            if row.len() != features.len() {
                return Err(ModelError::Shape {
                    stage: "classifier",
                    expected: row.len(),
                    actual: features.len(),
                });
            }
            let score: f64 = row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>()
                + self.intercepts.get(class_idx).copied().unwrap_or(0.0);
            // Ties keep the lowest class index.
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((class_idx, score));
            }
        }
        best.map(|(idx, _)| idx).ok_or(ModelError::Shape {
            stage: "classifier",
            expected: 1,
            actual: 0,
        })
    }
}

/// Fixed linear projection fitted offline: `(x - mean) · components^T`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcaProjection {
    pub mean: Vec<f64>,
    pub components: Vec<Vec<f64>>,
}

impl PcaProjection {
    /// Project the concatenated feature vector into the component space.
    ///
    /// # Errors
    /// Shape error when the input width does not match the fitted basis.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != self.mean.len() {
            return Err(ModelError::Shape {
                stage: "pca",
                expected: self.mean.len(),
                actual: features.len(),
            });
        }

        let centered: Vec<f64> = features
            .iter()
            .zip(&self.mean)
            .map(|(x, m)| x - m)
            .collect();

        let mut projected = Vec::with_capacity(self.components.len());
        for row in &self.components {
            if row.len() != centered.len() {
                return Err(ModelError::Shape {
                    stage: "pca",
                    expected: centered.len(),
                    actual: row.len(),
                });
            }
            projected.push(row.iter().zip(&centered).map(|(c, x)| c * x).sum());
        }
        Ok(projected)
    }
}

/// Digest manifest binding artifact files to SHA-256 hashes.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArtifactManifest {
    version: u32,
    files: BTreeMap<String, String>,
}

/// The five fitted artifacts, loaded once at startup and passed around
/// explicitly. Read-only for the life of the process.
#[derive(Debug)]
pub struct ArtifactBundle {
    pub scaler: NumericScaler,
    pub encoder: OneHotEncoder,
    pub labels: LabelEncoder,
    pub classifier: LinearClassifier,
    pub pca: PcaProjection,
}

impl ArtifactBundle {
    /// Load and cross-validate all five artifacts from `dir`.
    ///
    /// # Errors
    /// Any missing file, parse failure, digest mismatch, or shape/vocabulary
    /// drift between the artifacts and the form is a startup failure.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        verify_manifest(dir)?;

        let scaler: NumericScaler = read_artifact(&dir.join(SCALER_FILE))?;
        let encoder: OneHotEncoder = read_artifact(&dir.join(ENCODER_FILE))?;
        let labels: LabelEncoder = read_artifact(&dir.join(LABELS_FILE))?;
        let classifier: LinearClassifier = read_artifact(&dir.join(CLASSIFIER_FILE))?;
        let pca: PcaProjection = read_artifact(&dir.join(PCA_FILE))?;

        let bundle = Self {
            scaler,
            encoder,
            labels,
            classifier,
            pca,
        };
        bundle.validate()?;

        tracing::info!(
            dir = %dir.display(),
            encoded_width = bundle.encoder.width(),
            components = bundle.pca.components.len(),
            classes = bundle.labels.classes.len(),
            "model artifacts loaded"
        );
        Ok(bundle)
    }

    /// Cross-check artifact shapes against each other and the form.
    fn validate(&self) -> Result<(), ModelError> {
        // Column order must match the canonical list field-for-field.
        let expected: Vec<String> = CATEGORICAL_COLUMNS.iter().map(|c| (*c).to_string()).collect();
        if self.encoder.columns != expected {
            return Err(ModelError::ColumnMismatch {
                expected,
                actual: self.encoder.columns.clone(),
            });
        }
        if self.encoder.categories.len() != self.encoder.columns.len() {
            return Err(ModelError::Shape {
                stage: "one-hot encoder",
                expected: self.encoder.columns.len(),
                actual: self.encoder.categories.len(),
            });
        }

        // Every code the form can emit must be in the fitted vocabulary.
        // The reverse is allowed: dechal/rechal carry an unreachable U.
        for (col_idx, column) in self.encoder.columns.iter().enumerate() {
            let emitted = form_vocabulary(column).unwrap_or_default();
            for code in emitted {
                if !self.encoder.categories[col_idx].iter().any(|c| c == code) {
                    return Err(ModelError::MissingCategory {
                        column: column.clone(),
                        value: code.to_string(),
                    });
                }
            }
        }

        if self.scaler.mean.len() != 1 || self.scaler.scale.len() != 1 {
            return Err(ModelError::Shape {
                stage: "scaler",
                expected: 1,
                actual: self.scaler.mean.len().max(self.scaler.scale.len()),
            });
        }

        // PCA input width = encoded block + the numeric column.
        let feature_width = self.encoder.width() + 1;
        if self.pca.mean.len() != feature_width {
            return Err(ModelError::Shape {
                stage: "pca",
                expected: feature_width,
                actual: self.pca.mean.len(),
            });
        }
        for row in &self.pca.components {
            if row.len() != feature_width {
                return Err(ModelError::Shape {
                    stage: "pca",
                    expected: feature_width,
                    actual: row.len(),
                });
            }
        }

        // Classifier: one row and intercept per class, over the PCA space.
        let classes = self.labels.classes.len();
        if self.classifier.coefficients.len() != classes
            || self.classifier.intercepts.len() != classes
        {
            return Err(ModelError::Shape {
                stage: "classifier",
                expected: classes,
                actual: self.classifier.coefficients.len(),
            });
        }
        for row in &self.classifier.coefficients {
            if row.len() != self.pca.components.len() {
                return Err(ModelError::Shape {
                    stage: "classifier",
                    expected: self.pca.components.len(),
                    actual: row.len(),
                });
            }
        }

        // Every class the decoder can produce must have an outcome label.
        for class in &self.labels.classes {
            if OutcomeCode::from_code(class).is_none() {
                return Err(ModelError::UnmappedLabel(class.clone()));
            }
        }

        Ok(())
    }
}

impl SeverityModel for ArtifactBundle {
    fn predict(&self, record: &CaseRecord) -> Result<OutcomeCode, ModelError> {
        // Encode categoricals, scale the numeric column, concatenate in
        // that order.
        let codes = record.categorical_codes();
        let mut features = self.encoder.transform(&codes)?;
        features.push(self.scaler.transform(record.numeric_value())?);
        tracing::debug!(width = features.len(), "assembled feature vector");

        let projected = self.pca.transform(&features)?;
        let class_idx = self.classifier.predict(&projected)?;
        let code = self.labels.decode(class_idx)?;

        let outcome = OutcomeCode::from_code(code)
            .ok_or_else(|| ModelError::UnmappedLabel(code.to_string()))?;
        tracing::debug!(class_idx, code, "pipeline produced outcome");
        Ok(outcome)
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let content = fs::read_to_string(path).map_err(|source| ModelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ModelError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Verify `manifest.json` when present: every artifact file must be listed
/// and its SHA-256 digest must match. A missing manifest only logs a
/// warning; this is a single-operator tool, not a distribution channel.
fn verify_manifest(dir: &Path) -> Result<(), ModelError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        tracing::warn!(dir = %dir.display(), "no artifact manifest, skipping digest check");
        return Ok(());
    }

    let manifest: ArtifactManifest = read_artifact(&manifest_path)?;
    if manifest.version != 1 {
        return Err(ModelError::DigestMismatch(format!(
            "unsupported manifest version {}",
            manifest.version
        )));
    }

    for name in ARTIFACT_FILES {
        let expected = manifest
            .files
            .get(name)
            .ok_or_else(|| ModelError::DigestMismatch(format!("{name} not listed in manifest")))?;
        let path = dir.join(name);
        let bytes = fs::read(&path).map_err(|source| ModelError::Read {
            path: path.clone(),
            source,
        })?;
        let actual = sha256_hex(&bytes);
        if &actual != expected {
            return Err(ModelError::DigestMismatch(name.to_string()));
        }
    }

    tracing::info!("artifact digests verified");
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Continent, Dechallenge, Drug, IndicationCategory, OrganClass, Rechallenge, Sex,
    };
    use tempfile::tempdir;

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

    /// Minimal bundle whose arithmetic is checkable by hand: one category
    /// per column (the sample record's codes), identity-ish PCA, two
    /// classes scored so HO always wins.
    fn tiny_bundle() -> ArtifactBundle {
        let codes = sample_record().categorical_codes();
        ArtifactBundle {
            scaler: NumericScaler {
                mean: vec![45.0],
                scale: vec![1.0],
            },
            encoder: OneHotEncoder {
                columns: CATEGORICAL_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
                categories: codes.iter().map(|c| vec![(*c).to_string()]).collect(),
            },
            labels: LabelEncoder {
                classes: vec!["DE".to_string(), "HO".to_string()],
            },
            classifier: LinearClassifier {
                coefficients: vec![vec![-1.0], vec![2.0]],
                intercepts: vec![0.0, 0.0],
            },
            pca: PcaProjection {
                mean: vec![0.0; 8],
                components: vec![vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]],
            },
        }
    }

    /// Full-vocabulary artifact set, written to `dir` as JSON. Shapes are
    /// real (53 one-hot columns + age); numbers are synthetic.
    fn write_test_artifacts(dir: &Path, with_manifest: bool) {
        let columns: Vec<String> = CATEGORICAL_COLUMNS.iter().map(|c| (*c).to_string()).collect();
        let categories: Vec<Vec<String>> = columns
            .iter()
            .map(|col| {
                let mut cats: Vec<String> = form_vocabulary(col)
                    .expect("known column")
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                // dechal/rechal were fitted with an extra U the form never
                // emits.
                if col == "dechal" || col == "rechal" {
                    cats.push("U".to_string());
                }
                cats.sort();
                cats
            })
            .collect();

        let encoder = OneHotEncoder { columns, categories };
        let width = encoder.width() + 1;

        let scaler = NumericScaler {
            mean: vec![58.3],
            scale: vec![17.6],
        };
        let labels = LabelEncoder {
            classes: ["DE", "DS", "HO", "LT", "OT"].iter().map(|c| (*c).to_string()).collect(),
        };

        let n_components = 6;
        let pca = PcaProjection {
            mean: vec![0.1; width],
            components: (0..n_components)
                .map(|k| (0..width).map(|i| if i % n_components == k { 0.5 } else { -0.05 }).collect())
                .collect(),
        };
        let classifier = LinearClassifier {
            coefficients: (0..labels.classes.len())
                .map(|c| (0..n_components).map(|k| ((c + k) % 3) as f64 * 0.4 - 0.3).collect())
                .collect(),
            intercepts: vec![0.05, -0.1, 0.2, 0.0, -0.05],
        };

        let write = |name: &str, json: String| fs::write(dir.join(name), json).unwrap();
        write(SCALER_FILE, serde_json::to_string_pretty(&scaler).unwrap());
        write(ENCODER_FILE, serde_json::to_string_pretty(&encoder).unwrap());
        write(LABELS_FILE, serde_json::to_string_pretty(&labels).unwrap());
        write(CLASSIFIER_FILE, serde_json::to_string_pretty(&classifier).unwrap());
        write(PCA_FILE, serde_json::to_string_pretty(&pca).unwrap());

        if with_manifest {
            let files: BTreeMap<String, String> = ARTIFACT_FILES
                .iter()
                .map(|name| {
                    let bytes = fs::read(dir.join(name)).unwrap();
                    ((*name).to_string(), sha256_hex(&bytes))
                })
                .collect();
            let manifest = ArtifactManifest { version: 1, files };
            write(MANIFEST_FILE, serde_json::to_string_pretty(&manifest).unwrap());
        }
    }

    #[test]
    fn test_one_hot_layout() {
        let encoder = OneHotEncoder {
            columns: vec!["a".into(), "b".into()],
            categories: vec![
                vec!["x".into(), "y".into(), "z".into()],
                vec!["p".into(), "q".into()],
            ],
        };
        assert_eq!(encoder.width(), 5);
        let block = encoder.transform(&["y", "p"]).unwrap();
        assert_eq!(block, vec![0.0, 1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_one_hot_unknown_category() {
        let encoder = OneHotEncoder {
            columns: vec!["a".into()],
            categories: vec![vec!["x".into()]],
        };
        let err = encoder.transform(&["nope"]).unwrap_err();
        assert!(matches!(err, ModelError::UnknownCategory { .. }));
    }

    #[test]
    fn test_scaler_math() {
        let scaler = NumericScaler {
            mean: vec![50.0],
            scale: vec![10.0],
        };
        assert!((scaler.transform(65.0).unwrap() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pca_projection_math() {
        let pca = PcaProjection {
            mean: vec![1.0, 1.0],
            components: vec![vec![1.0, 0.0], vec![0.0, 2.0]],
        };
        let out = pca.transform(&[3.0, 2.0]).unwrap();
        assert_eq!(out, vec![2.0, 2.0]);

        let err = pca.transform(&[1.0]).unwrap_err();
        assert!(matches!(err, ModelError::Shape { stage: "pca", .. }));
    }

    #[test]
    fn test_classifier_argmax() {
        let clf = LinearClassifier {
            coefficients: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.5, 0.5]],
            intercepts: vec![0.0, 0.0, 0.0],
        };
        assert_eq!(clf.predict(&[2.0, 0.0]).unwrap(), 0);
        assert_eq!(clf.predict(&[0.0, 2.0]).unwrap(), 1);
        // Tie keeps the lowest index.
        assert_eq!(clf.predict(&[1.0, 1.0]).unwrap(), 0);
    }

    #[test]
    fn test_pipeline_hand_checked() {
        // One-hot is all ones (one category per column), scaled age is 0,
        // PCA picks feature 0, classifier scores [-1, 2] so class 1 (HO)
        // wins.
        let bundle = tiny_bundle();
        let outcome = bundle.predict(&sample_record()).unwrap();
        assert_eq!(outcome, OutcomeCode::Hospitalization);
    }

    #[test]
    fn test_pipeline_deterministic() {
        let dir = tempdir().unwrap();
        write_test_artifacts(dir.path(), true);
        let bundle = ArtifactBundle::load(dir.path()).unwrap();

        let record = sample_record();
        let first = bundle.predict(&record).unwrap();
        for _ in 0..10 {
            assert_eq!(bundle.predict(&record).unwrap(), first);
        }
    }

    #[test]
    fn test_shipped_artifacts_load_and_predict() {
        // The bundle checked into `model/` must pass validation and give a
        // stable answer for the reference case.
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("model");
        let bundle = ArtifactBundle::load(&dir).expect("shipped artifacts should load");

        let record = sample_record();
        let first = bundle.predict(&record).expect("shipped artifacts should predict");
        assert_eq!(bundle.predict(&record).unwrap(), first);
        assert!(OutcomeCode::ALL.contains(&first));
    }

    #[test]
    fn test_load_validates_and_round_trips() {
        let dir = tempdir().unwrap();
        write_test_artifacts(dir.path(), true);
        let bundle = ArtifactBundle::load(dir.path()).unwrap();

        assert_eq!(bundle.encoder.width(), 53);
        // Label coverage: the decoder can only produce mapped codes.
        for class in &bundle.labels.classes {
            assert!(OutcomeCode::from_code(class).is_some());
        }
    }

    #[test]
    fn test_load_without_manifest_is_allowed() {
        let dir = tempdir().unwrap();
        write_test_artifacts(dir.path(), false);
        assert!(ArtifactBundle::load(dir.path()).is_ok());
    }

    #[test]
    fn test_tampered_artifact_fails_digest_check() {
        let dir = tempdir().unwrap();
        write_test_artifacts(dir.path(), true);

        // Flip a byte after the manifest was written.
        let path = dir.path().join(PCA_FILE);
        let mut content = fs::read_to_string(&path).unwrap();
        content.push(' ');
        fs::write(&path, content).unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, ModelError::DigestMismatch(_)));
    }

    #[test]
    fn test_missing_artifact_fails() {
        let dir = tempdir().unwrap();
        write_test_artifacts(dir.path(), false);
        fs::remove_file(dir.path().join(CLASSIFIER_FILE)).unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, ModelError::Read { .. }));
    }

    #[test]
    fn test_reordered_columns_rejected() {
        let dir = tempdir().unwrap();
        write_test_artifacts(dir.path(), false);

        let mut encoder: OneHotEncoder =
            serde_json::from_str(&fs::read_to_string(dir.path().join(ENCODER_FILE)).unwrap())
                .unwrap();
        encoder.columns.swap(0, 1);
        encoder.categories.swap(0, 1);
        fs::write(
            dir.path().join(ENCODER_FILE),
            serde_json::to_string(&encoder).unwrap(),
        )
        .unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, ModelError::ColumnMismatch { .. }));
    }

    #[test]
    fn test_vocabulary_drift_rejected() {
        let dir = tempdir().unwrap();
        write_test_artifacts(dir.path(), false);

        // Drop a drug the form can still emit.
        let mut encoder: OneHotEncoder =
            serde_json::from_str(&fs::read_to_string(dir.path().join(ENCODER_FILE)).unwrap())
                .unwrap();
        encoder.categories[0].retain(|c| c != "METFORMIN");
        fs::write(
            dir.path().join(ENCODER_FILE),
            serde_json::to_string(&encoder).unwrap(),
        )
        .unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, ModelError::MissingCategory { .. }));
    }

    #[test]
    fn test_unmapped_label_rejected() {
        let dir = tempdir().unwrap();
        write_test_artifacts(dir.path(), false);

        let labels = LabelEncoder {
            classes: vec!["DE".into(), "DS".into(), "HO".into(), "LT".into(), "XX".into()],
        };
        fs::write(
            dir.path().join(LABELS_FILE),
            serde_json::to_string(&labels).unwrap(),
        )
        .unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, ModelError::UnmappedLabel(_)));
    }
}
