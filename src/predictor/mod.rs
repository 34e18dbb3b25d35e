pub mod classifier;
pub mod scaler;

use std::fmt;
use std::fs;
use std::sync::OnceLock;
use log::info;
use serde::Serialize;
use crate::errors::ModelError;
use crate::models::forecast::PredictionFeatures;
use crate::predictor::classifier::Classifier;
use crate::predictor::scaler::StandardScaler;

/// Outcome of a fire prediction
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prediction {
    #[serde(rename = "Fire")]
    Fire,
    #[serde(rename = "No Fire")]
    NoFire,
}

impl From<u8> for Prediction {
    fn from(label: u8) -> Self {
        if label == 1 { Prediction::Fire } else { Prediction::NoFire }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Prediction::Fire => write!(f, "Fire"),
            Prediction::NoFire => write!(f, "No Fire"),
        }
    }
}

/// Classifier and feature scaler as produced by the offline training job
pub struct TrainedModel {
    classifier: Classifier,
    scaler: StandardScaler,
}

impl TrainedModel {
    /// Returns a validated model
    ///
    /// # Arguments
    ///
    /// * 'classifier' - the classifier
    /// * 'scaler' - the scaler fitted together with the classifier
    pub fn new(classifier: Classifier, scaler: StandardScaler) -> Result<Self, ModelError> {
        scaler.validate()?;
        classifier.validate(scaler.n_features())?;

        Ok(Self { classifier, scaler })
    }

    /// Loads and validates the two model artifacts
    ///
    /// # Arguments
    ///
    /// * 'classifier_path' - path to the classifier artifact
    /// * 'scaler_path' - path to the scaler artifact
    pub fn load(classifier_path: &str, scaler_path: &str) -> Result<Self, ModelError> {
        let json = fs::read_to_string(classifier_path)
            .map_err(|e| ModelError::Io(format!("{}: {}", classifier_path, e)))?;
        let classifier: Classifier = serde_json::from_str(&json)?;

        let json = fs::read_to_string(scaler_path)
            .map_err(|e| ModelError::Io(format!("{}: {}", scaler_path, e)))?;
        let scaler: StandardScaler = serde_json::from_str(&json)?;

        TrainedModel::new(classifier, scaler)
    }

    /// Scales the raw features and returns the predicted label
    ///
    /// # Arguments
    ///
    /// * 'features' - raw features in the order the scaler was fitted on
    pub fn predict_raw(&self, features: &[f64]) -> Result<u8, ModelError> {
        let scaled = self.scaler.transform(features)?;

        Ok(self.classifier.predict(&scaled))
    }

    /// Predicts fire or no fire for the given features
    ///
    /// # Arguments
    ///
    /// * 'features' - the prediction features
    pub fn predict(&self, features: &PredictionFeatures) -> Result<Prediction, ModelError> {
        Ok(Prediction::from(self.predict_raw(&features.to_vec())?))
    }
}

/// Holds the model for the lifetime of the process. It starts out unloaded and
/// becomes ready exactly once, there is no reload.
#[derive(Default)]
pub struct ModelSlot {
    model: OnceLock<TrainedModel>,
}

impl ModelSlot {
    pub fn new() -> Self {
        Self { model: OnceLock::new() }
    }

    pub fn is_ready(&self) -> bool {
        self.model.get().is_some()
    }

    /// Moves the slot from unloaded to ready
    ///
    /// # Arguments
    ///
    /// * 'model' - the model to serve
    pub fn set(&self, model: TrainedModel) -> Result<(), ModelError> {
        self.model.set(model).map_err(|_| ModelError::AlreadyLoaded)
    }

    /// Loads the artifacts from file and moves the slot to ready
    ///
    /// # Arguments
    ///
    /// * 'classifier_path' - path to the classifier artifact
    /// * 'scaler_path' - path to the scaler artifact
    pub fn load(&self, classifier_path: &str, scaler_path: &str) -> Result<(), ModelError> {
        if self.is_ready() {
            return Err(ModelError::AlreadyLoaded);
        }
        self.set(TrainedModel::load(classifier_path, scaler_path)?)?;
        info!("model loaded from {} and {}", classifier_path, scaler_path);

        Ok(())
    }

    /// Returns the loaded model or ModelError::NotReady
    pub fn get(&self) -> Result<&TrainedModel, ModelError> {
        self.model.get().ok_or(ModelError::NotReady)
    }

    pub fn predict(&self, features: &PredictionFeatures) -> Result<Prediction, ModelError> {
        self.get()?.predict(features)
    }
}
