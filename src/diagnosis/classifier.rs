use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::label::FaultLabel;
use crate::data::model::FeatureVector;

/// Child index marking a leaf node.
const LEAF: i64 = -1;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("reading model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing model artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model expects {found} features, diagnosis supplies {expected}")]
    FeatureCount { expected: usize, found: usize },

    #[error("invalid model: {0}")]
    Invalid(String),
}

/// A pre-trained multi-class model over [`FeatureVector`]s.
///
/// Class indices follow [`FaultLabel::index`].
pub trait Classifier {
    /// Index of the winning class.
    fn predict(&self, features: &FeatureVector) -> Result<usize, ModelError>;

    /// Probability of every class, indexed by class.
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError>;
}

// ---------------------------------------------------------------------------
// DecisionTree – one tree in flattened array form
// ---------------------------------------------------------------------------

/// Parallel arrays indexed by node id; node 0 is the root.
///
/// Only reachable through a validated [`ForestClassifier`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    /// Feature tested at each internal node (ignored on leaves).
    feature: Vec<i64>,
    threshold: Vec<f64>,
    /// Per-class training counts (or weights) reaching each node.
    value: Vec<Vec<f64>>,
}

impl DecisionTree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn validate(
        &self,
        tree_no: usize,
        n_features: usize,
        n_classes: usize,
    ) -> Result<(), ModelError> {
        let invalid = |msg: String| ModelError::Invalid(format!("tree {tree_no}: {msg}"));

        let n = self.node_count();
        if n == 0 {
            return Err(invalid("no nodes".into()));
        }
        if [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ]
        .iter()
        .any(|&len| len != n)
        {
            return Err(invalid("node arrays differ in length".into()));
        }

        for node in 0..n {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            let row = &self.value[node];
            if row.len() != n_classes {
                return Err(invalid(format!(
                    "node {node} has {} class values, expected {n_classes}",
                    row.len()
                )));
            }

            if left == LEAF {
                if right != LEAF {
                    return Err(invalid(format!("node {node} has only a right child")));
                }
                let total: f64 = row.iter().sum();
                if row.iter().any(|v| !v.is_finite() || *v < 0.0)
                    || !total.is_finite()
                    || total <= 0.0
                {
                    return Err(invalid(format!("leaf {node} has no usable class counts")));
                }
                continue;
            }

            // Children must come after their parent, which rules out cycles.
            for child in [left, right] {
                if child <= node as i64 || child >= n as i64 {
                    return Err(invalid(format!("node {node} points to child {child}")));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(invalid(format!("node {node} splits on feature {feature}")));
            }
            if !self.threshold[node].is_finite() {
                return Err(invalid(format!("node {node} has a non-finite threshold")));
            }
        }
        Ok(())
    }

    /// Class counts at the leaf reached by `x`.
    fn leaf_values(&self, x: &[f64]) -> &[f64] {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left == LEAF {
                return &self.value[node];
            }
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }
}

// ---------------------------------------------------------------------------
// ForestClassifier – averaged ensemble of decision trees
// ---------------------------------------------------------------------------

/// Random-forest classifier loaded from a JSON artifact.
///
/// Each tree votes with its leaf's normalized class counts; the forest
/// probability is the mean vote and the prediction its argmax.
/// Deserializing always validates, so a forest in hand is safe to score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ForestArtifact")]
pub struct ForestClassifier {
    n_features: usize,
    n_classes: usize,
    trees: Vec<DecisionTree>,
}

/// On-disk shape of the artifact, before validation.
#[derive(Deserialize)]
struct ForestArtifact {
    n_features: usize,
    n_classes: usize,
    trees: Vec<DecisionTree>,
}

impl TryFrom<ForestArtifact> for ForestClassifier {
    type Error = ModelError;

    fn try_from(artifact: ForestArtifact) -> Result<Self, Self::Error> {
        let forest = ForestClassifier {
            n_features: artifact.n_features,
            n_classes: artifact.n_classes,
            trees: artifact.trees,
        };
        forest.validate()?;
        Ok(forest)
    }
}

impl ForestClassifier {
    /// Read and validate an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate an artifact.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let artifact: ForestArtifact = serde_json::from_str(text)?;
        Self::try_from(artifact)
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.n_features != FeatureVector::LEN {
            return Err(ModelError::FeatureCount {
                expected: FeatureVector::LEN,
                found: self.n_features,
            });
        }
        if self.n_classes != FaultLabel::COUNT {
            return Err(ModelError::Invalid(format!(
                "model has {} classes, expected {}",
                self.n_classes,
                FaultLabel::COUNT
            )));
        }
        if self.trees.is_empty() {
            return Err(ModelError::Invalid("forest has no trees".into()));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.n_features, self.n_classes)?;
        }
        Ok(())
    }
}

impl Classifier for ForestClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<usize, ModelError> {
        let proba = self.predict_proba(features)?;
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        Ok(best)
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        let x = features.as_array();
        let mut proba = vec![0.0; self.n_classes];
        for tree in &self.trees {
            let counts = tree.leaf_values(&x);
            let total: f64 = counts.iter().sum();
            for (p, c) in proba.iter_mut().zip(counts) {
                *p += c / total;
            }
        }
        let n_trees = self.trees.len() as f64;
        proba.iter_mut().for_each(|p| *p /= n_trees);
        Ok(proba)
    }
}
