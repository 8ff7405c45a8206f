// src/model/forest.rs
//
// Gradient boosted regression trees stored as JSON:
//
// ensemble
//  ├── base_score
//  ├── feature_names   (must equal the schema, in order)
//  └── trees[]
//       └── nodes[]    (node 0 is the root)
//            ├── leaf        { value }
//            ├── numeric     { feature, threshold, yes, no }   value <  threshold -> yes
//            └── categorical { feature, categories, yes, no }  value in categories -> yes

use crate::model::artifact::{read_artifact, ArtifactError};
use crate::model::{FeatureRow, FeatureValue, InferenceError, PriceModel};
use crate::schema::{self, FeatureKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Leaf {
        value: f64,
    },
    Numeric {
        feature: String,
        threshold: f64,
        yes: usize,
        no: usize,
    },
    Categorical {
        feature: String,
        categories: Vec<String>,
        yes: usize,
        no: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Walks from the root to a leaf. A walk longer than the node count means
    /// the child links loop.
    fn leaf_value(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        let mut idx = 0;
        for _ in 0..=self.nodes.len() {
            let node = self
                .nodes
                .get(idx)
                .ok_or_else(|| InferenceError::Malformed(format!("node {idx} does not exist")))?;

            idx = match node {
                Node::Leaf { value } => return Ok(*value),
                Node::Numeric {
                    feature,
                    threshold,
                    yes,
                    no,
                } => match lookup(row, feature)? {
                    FeatureValue::Number(v) if *v < *threshold => *yes,
                    FeatureValue::Number(_) => *no,
                    other => return Err(mismatch(feature, "number", other)),
                },
                Node::Categorical {
                    feature,
                    categories,
                    yes,
                    no,
                } => match lookup(row, feature)? {
                    FeatureValue::Text(v) if categories.iter().any(|c| c == v) => *yes,
                    FeatureValue::Text(_) => *no,
                    other => return Err(mismatch(feature, "text", other)),
                },
            };
        }

        Err(InferenceError::Malformed(
            "tree traversal does not terminate".into(),
        ))
    }
}

fn lookup<'a>(row: &'a FeatureRow, feature: &str) -> Result<&'a FeatureValue, InferenceError> {
    row.get(feature)
        .ok_or_else(|| InferenceError::MissingFeature(feature.to_string()))
}

fn mismatch(feature: &str, expected: &'static str, found: &FeatureValue) -> InferenceError {
    InferenceError::TypeMismatch {
        feature: feature.to_string(),
        expected,
        found: found.type_name(),
    }
}

/// Sum-of-trees regressor predicting log price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub base_score: f64,
    pub feature_names: Vec<String>,
    pub trees: Vec<Tree>,
}

impl TreeEnsemble {
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let ensemble: TreeEnsemble = serde_json::from_str(json)?;
        ensemble.validate()?;
        Ok(ensemble)
    }

    /// Reads and validates a model file, returning it with its SHA-256.
    pub fn load(path: &Path) -> Result<(Self, String), ArtifactError> {
        let artifact = read_artifact(path)?;
        let ensemble: TreeEnsemble = serde_json::from_slice(&artifact.bytes)?;
        ensemble.validate()?;
        Ok((ensemble, artifact.sha256))
    }

    /// Checks the artifact against the feature schema and its own links.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let expected: Vec<&str> = schema::feature_names().collect();
        if self.feature_names != expected {
            return Err(ArtifactError::Contract(format!(
                "feature_names {:?} do not match expected {:?}",
                self.feature_names, expected
            )));
        }
        if !self.base_score.is_finite() {
            return Err(ArtifactError::Contract("base_score is not finite".into()));
        }
        if self.trees.is_empty() {
            return Err(ArtifactError::Contract("model has no trees".into()));
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ArtifactError::Contract(format!("tree {t} has no nodes")));
            }
            for (n, node) in tree.nodes.iter().enumerate() {
                let at = || format!("tree {t} node {n}");
                let (feature, textual, yes, no) = match node {
                    Node::Leaf { value } => {
                        if !value.is_finite() {
                            return Err(ArtifactError::Contract(format!(
                                "{}: leaf value is not finite",
                                at()
                            )));
                        }
                        continue;
                    }
                    Node::Numeric {
                        feature, yes, no, ..
                    } => (feature, false, *yes, *no),
                    Node::Categorical {
                        feature, yes, no, ..
                    } => (feature, true, *yes, *no),
                };

                match schema::kind_of(feature) {
                    None => {
                        return Err(ArtifactError::Contract(format!(
                            "{}: unknown feature '{feature}'",
                            at()
                        )))
                    }
                    Some(kind) if kind.is_textual() != textual => {
                        return Err(ArtifactError::Contract(format!(
                            "{}: {} split on {} feature '{feature}'",
                            at(),
                            if textual { "categorical" } else { "numeric" },
                            describe(kind)
                        )))
                    }
                    Some(_) => {}
                }

                for child in [yes, no] {
                    if child >= tree.nodes.len() {
                        return Err(ArtifactError::Contract(format!(
                            "{}: child {child} out of range",
                            at()
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    fn score(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        self.trees
            .iter()
            .try_fold(self.base_score, |acc, tree| Ok(acc + tree.leaf_value(row)?))
    }
}

fn describe(kind: FeatureKind) -> &'static str {
    if kind.is_textual() {
        "text"
    } else {
        "numeric"
    }
}

impl PriceModel for TreeEnsemble {
    fn predict(&self, batch: &[FeatureRow]) -> Result<Vec<f64>, InferenceError> {
        batch.iter().map(|row| self.score(row)).collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Two stumps: one on city, one on accommodates.
    pub fn small_ensemble() -> TreeEnsemble {
        TreeEnsemble {
            base_score: 4.0,
            feature_names: schema::feature_names().map(str::to_string).collect(),
            trees: vec![
                Tree {
                    nodes: vec![
                        Node::Categorical {
                            feature: "city".into(),
                            categories: vec!["New York".into(), "San Francisco".into()],
                            yes: 1,
                            no: 2,
                        },
                        Node::Leaf { value: 0.5 },
                        Node::Leaf { value: -0.25 },
                    ],
                },
                Tree {
                    nodes: vec![
                        Node::Numeric {
                            feature: "accommodates".into(),
                            threshold: 4.0,
                            yes: 1,
                            no: 2,
                        },
                        Node::Leaf { value: -0.1 },
                        Node::Leaf { value: 0.3 },
                    ],
                },
            ],
        }
    }
}
