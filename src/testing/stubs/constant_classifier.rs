use crate::classifiers::{Classifier, Prediction};
use crate::core::{DatasetMetadata, Instance};
use crate::error::DatasetError;
use std::sync::Arc;

/// Always predicts the same internal class value.
pub struct ConstantClassifier {
    metadata: Arc<DatasetMetadata>,
    internal: f64,
}

impl ConstantClassifier {
    pub fn new(metadata: Arc<DatasetMetadata>, internal: f64) -> Self {
        Self { metadata, internal }
    }
}

impl Classifier for ConstantClassifier {
    fn train(&mut self, _instances: &[&Instance]) {}

    fn predict(&self, _instance: &Instance) -> Result<Prediction, DatasetError> {
        Ok(Prediction {
            label: self.metadata.class_label(self.internal)?,
            confidence: self.internal,
        })
    }
}
