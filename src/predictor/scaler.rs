use serde::{Deserialize, Serialize};
use crate::errors::ModelError;
use crate::models::forecast::FEATURE_ORDER;

/// Standardization transform fitted offline, i.e. (x - mean) / scale per feature
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StandardScaler {
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Number of features the scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Checks that the artifact is consistent and fitted on the serving feature order
    ///
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.mean.is_empty() {
            return Err(ModelError::InvalidArtifact("scaler has no features".to_string()));
        }
        if self.mean.len() != self.scale.len() {
            return Err(ModelError::InvalidArtifact(format!(
                "scaler mean has {} values but scale has {}", self.mean.len(), self.scale.len())));
        }
        if !self.feature_names.is_empty() && self.feature_names != FEATURE_ORDER {
            return Err(ModelError::InvalidArtifact(format!(
                "scaler fitted on {:?}, expected {:?}", self.feature_names, FEATURE_ORDER)));
        }

        Ok(())
    }

    /// Scales a raw feature vector. A zero scale is treated as one, which leaves
    /// constant features centered but unscaled.
    ///
    /// # Arguments
    ///
    /// * 'features' - raw features, must have exactly as many values as the scaler
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != self.n_features() {
            return Err(ModelError::ShapeMismatch { expected: self.n_features(), got: features.len() });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| {
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect())
    }
}
