use std::fmt::{Display, Formatter};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifiers::{Classifier, Prediction};
use crate::core::{DatasetMetadata, Instance};
use crate::error::DatasetError;
use crate::utils::math::sigmoid;

const INITIAL_WEIGHT: f64 = 0.1;
const DECISION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearningParameters {
    pub learning_rate: f64,
    pub epochs: usize,
}

/// Binary logistic regression trained by per-instance gradient steps.
///
/// Internal class value `0.0` is the first declared class label and `1.0`
/// the second. Training always restarts from weights and bias of `0.1` and
/// makes `epochs` ordered passes over the data, with no shuffling and no
/// early stopping, so the result depends only on the data, its order and the
/// parameters.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    metadata: Arc<DatasetMetadata>,
    weights: Vec<f64>,
    bias: f64,
    params: LearningParameters,
}

impl LogisticRegression {
    pub fn new(metadata: Arc<DatasetMetadata>, params: LearningParameters) -> Self {
        let weights = vec![INITIAL_WEIGHT; metadata.number_of_features()];
        Self {
            metadata,
            weights,
            bias: INITIAL_WEIGHT,
            params,
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// `sigmoid(bias + w · x)` for the current weights.
    pub fn compute_output(&self, instance: &Instance) -> f64 {
        let net = self
            .weights
            .iter()
            .zip(&instance.feature_vector)
            .fold(self.bias, |acc, (w, x)| acc + w * x);
        sigmoid(net)
    }

    /// One online gradient step towards the instance's class label.
    pub fn update_weights(&mut self, instance: &Instance) {
        let output = self.compute_output(instance);
        let error = instance.class_label - output;
        let delta = self.params.learning_rate * error * output * (1.0 - output);

        self.bias += delta;
        for (w, x) in self.weights.iter_mut().zip(&instance.feature_vector) {
            *w += delta * x;
        }
    }

    fn reset(&mut self) {
        self.weights.iter_mut().for_each(|w| *w = INITIAL_WEIGHT);
        self.bias = INITIAL_WEIGHT;
    }
}

impl Classifier for LogisticRegression {
    fn train(&mut self, instances: &[&Instance]) {
        self.reset();
        for _ in 0..self.params.epochs {
            for instance in instances {
                self.update_weights(instance);
            }
        }
        debug!(
            "trained on {} instances for {} epochs (learning rate {})",
            instances.len(),
            self.params.epochs,
            self.params.learning_rate
        );
    }

    fn predict(&self, instance: &Instance) -> Result<Prediction, DatasetError> {
        let confidence = self.compute_output(instance);
        let internal = if confidence > DECISION_THRESHOLD { 1.0 } else { 0.0 };
        Ok(Prediction {
            label: self.metadata.class_label(internal)?,
            confidence,
        })
    }
}

/// Weight dump: one `weights[i]` line per feature, then the bias.
impl Display for LogisticRegression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, w) in self.weights.iter().enumerate() {
            writeln!(f, "weights[{i}] = {w:.6}")?;
        }
        writeln!(f, "bias = {:.6}", self.bias)
    }
}
