use serde::{Deserialize, Serialize};
use crate::errors::ModelError;

/// Node in a flat decision tree. Samples with x[feature] <= threshold go left.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Split { feature: usize, threshold: f64, left: usize, right: usize },
    Leaf { probability: f64 },
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DecisionTree {
    pub nodes: Vec<Node>,
}

impl DecisionTree {
    /// Walks the tree from the root and returns the fire probability of the reached leaf
    ///
    /// # Arguments
    ///
    /// * 'x' - scaled features
    fn probability(&self, x: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { probability } => return *probability,
                Node::Split { feature, threshold, left, right } => {
                    index = if x[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }

    /// Checks that all child references point forward to existing nodes, which
    /// also guarantees that every walk terminates
    ///
    /// # Arguments
    ///
    /// * 'n_features' - number of features the tree may split on
    fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::InvalidArtifact("decision tree has no nodes".to_string()));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split { feature, left, right, .. } => {
                    if *feature >= n_features {
                        return Err(ModelError::InvalidArtifact(format!(
                            "node {} splits on feature {} of {}", i, feature, n_features)));
                    }
                    for child in [left, right] {
                        if *child <= i || *child >= self.nodes.len() {
                            return Err(ModelError::InvalidArtifact(format!(
                                "node {} has invalid child {}", i, child)));
                        }
                    }
                }
                Node::Leaf { probability } => {
                    if !(0.0..=1.0).contains(probability) {
                        return Err(ModelError::InvalidArtifact(format!(
                            "leaf {} has probability {}", i, probability)));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Classifier families trained by the offline jobs
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    LogisticRegression { coefficients: Vec<f64>, intercept: f64 },
    DecisionTree(DecisionTree),
    RandomForest {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        n_features: Option<usize>,
        trees: Vec<DecisionTree>,
    },
}

impl Classifier {
    /// Number of features the classifier expects, if it can be told from the artifact.
    /// Trees only know the features they split on, so a forest without n_features
    /// falls back to the scaler's arity.
    pub fn n_features(&self) -> Option<usize> {
        match self {
            Classifier::LogisticRegression { coefficients, .. } => Some(coefficients.len()),
            Classifier::DecisionTree(_) => None,
            Classifier::RandomForest { n_features, .. } => *n_features,
        }
    }

    /// Validates the artifact against the number of features given by the scaler
    ///
    /// # Arguments
    ///
    /// * 'n_features' - number of features the scaler produces
    pub fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if let Some(expected) = self.n_features() {
            if expected != n_features {
                return Err(ModelError::InvalidArtifact(format!(
                    "classifier expects {} features but scaler produces {}", expected, n_features)));
            }
        }

        match self {
            Classifier::LogisticRegression { .. } => Ok(()),
            Classifier::DecisionTree(tree) => tree.validate(n_features),
            Classifier::RandomForest { trees, .. } => {
                if trees.is_empty() {
                    return Err(ModelError::InvalidArtifact("random forest has no trees".to_string()));
                }
                trees.iter().try_for_each(|t| t.validate(n_features))
            }
        }
    }

    /// Returns the probability of fire for an already scaled, validated feature vector
    ///
    /// # Arguments
    ///
    /// * 'x' - scaled features
    pub fn probability(&self, x: &[f64]) -> f64 {
        match self {
            Classifier::LogisticRegression { coefficients, intercept } => {
                let z = coefficients.iter().zip(x).map(|(w, v)| w * v).sum::<f64>() + intercept;
                1.0 / (1.0 + (-z).exp())
            }
            Classifier::DecisionTree(tree) => tree.probability(x),
            Classifier::RandomForest { trees, .. } => {
                trees.iter().map(|t| t.probability(x)).sum::<f64>() / trees.len() as f64
            }
        }
    }

    /// Returns the binary label, 1 meaning fire
    ///
    /// # Arguments
    ///
    /// * 'x' - scaled features
    pub fn predict(&self, x: &[f64]) -> u8 {
        if self.probability(x) > 0.5 { 1 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(feature: usize, threshold: f64, left: f64, right: f64) -> DecisionTree {
        DecisionTree {
            nodes: vec![
                Node::Split { feature, threshold, left: 1, right: 2 },
                Node::Leaf { probability: left },
                Node::Leaf { probability: right },
            ],
        }
    }

    #[test]
    fn logistic_regression_thresholds_at_half() {
        let c = Classifier::LogisticRegression { coefficients: vec![-1.0, 2.0, -1.0], intercept: 0.0 };
        assert_eq!(c.predict(&[0.0, 1.0, 0.0]), 1);
        assert_eq!(c.predict(&[1.0, 0.0, 1.0]), 0);
        assert_eq!(c.predict(&[0.0, 0.0, 0.0]), 0);
    }

    #[test]
    fn decision_tree_splits_left_on_equal() {
        let c = Classifier::DecisionTree(stump(1, 0.5, 0.0, 1.0));
        assert_eq!(c.predict(&[9.0, 0.5, 9.0]), 0);
        assert_eq!(c.predict(&[9.0, 0.6, 9.0]), 1);
    }

    #[test]
    fn random_forest_averages_trees() {
        let c = Classifier::RandomForest {
            n_features: Some(3),
            trees: vec![stump(0, 0.0, 1.0, 0.0), stump(1, 0.0, 0.0, 1.0), stump(2, 0.0, 1.0, 0.0)],
        };
        assert_eq!(c.predict(&[-1.0, 1.0, 1.0]), 1);
        assert_eq!(c.predict(&[1.0, -1.0, 1.0]), 0);
        assert!((c.probability(&[-1.0, -1.0, 1.0]) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_backward_and_dangling_children() {
        let looping = DecisionTree {
            nodes: vec![
                Node::Split { feature: 0, threshold: 0.0, left: 0, right: 1 },
                Node::Leaf { probability: 1.0 },
            ],
        };
        assert!(Classifier::DecisionTree(looping).validate(3).is_err());

        let dangling = DecisionTree {
            nodes: vec![Node::Split { feature: 0, threshold: 0.0, left: 1, right: 5 }, Node::Leaf { probability: 1.0 }],
        };
        assert!(Classifier::DecisionTree(dangling).validate(3).is_err());
    }

    #[test]
    fn rejects_unknown_feature_and_empty_forest() {
        assert!(Classifier::DecisionTree(stump(3, 0.0, 0.0, 1.0)).validate(3).is_err());
        assert!(Classifier::RandomForest { n_features: Some(3), trees: vec![] }.validate(3).is_err());
    }

    #[test]
    fn rejects_arity_other_than_scaler() {
        let c = Classifier::LogisticRegression { coefficients: vec![0.1; 18], intercept: 0.0 };
        assert!(c.validate(3).is_err());
        assert!(c.validate(18).is_ok());
    }

    #[test]
    fn decodes_tagged_artifact() {
        let json = r#"{
            "kind": "decision_tree",
            "nodes": [
                {"type": "split", "feature": 1, "threshold": 0.3, "left": 1, "right": 2},
                {"type": "leaf", "probability": 0.1},
                {"type": "leaf", "probability": 0.9}
            ]
        }"#;
        let c: Classifier = serde_json::from_str(json).unwrap();
        assert!(c.validate(3).is_ok());
        assert_eq!(c.predict(&[0.0, 1.0, 0.0]), 1);
    }

    #[test]
    fn decodes_tagged_forest_without_arity() {
        let json = r#"{
            "kind": "random_forest",
            "trees": [
                {"nodes": [
                    {"type": "split", "feature": 0, "threshold": 0.0, "left": 1, "right": 2},
                    {"type": "leaf", "probability": 0.8},
                    {"type": "leaf", "probability": 0.3}
                ]}
            ]
        }"#;
        let c: Classifier = serde_json::from_str(json).unwrap();
        assert_eq!(c.n_features(), None);
        assert!(c.validate(3).is_ok());
        assert_eq!(c.predict(&[-1.0, 0.0, 0.0]), 1);
        assert_eq!(c.predict(&[1.0, 0.0, 0.0]), 0);
    }

    #[test]
    fn forest_with_arity_must_match_scaler() {
        let json = r#"{"kind": "random_forest", "n_features": 18, "trees": [{"nodes": [{"type": "leaf", "probability": 0.5}]}]}"#;
        let c: Classifier = serde_json::from_str(json).unwrap();
        assert!(c.validate(3).is_err());
        assert!(c.validate(18).is_ok());
    }
}
