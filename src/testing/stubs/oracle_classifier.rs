use crate::classifiers::{Classifier, Prediction};
use crate::core::{DatasetMetadata, Instance};
use crate::error::DatasetError;
use std::sync::Arc;

/// Predicts each instance's own label with full confidence.
pub struct OracleClassifier {
    metadata: Arc<DatasetMetadata>,
    trained_on: usize,
}

impl OracleClassifier {
    pub fn new(metadata: Arc<DatasetMetadata>) -> Self {
        Self {
            metadata,
            trained_on: 0,
        }
    }

    pub fn trained_on(&self) -> usize {
        self.trained_on
    }
}

impl Classifier for OracleClassifier {
    fn train(&mut self, instances: &[&Instance]) {
        self.trained_on = instances.len();
    }

    fn predict(&self, instance: &Instance) -> Result<Prediction, DatasetError> {
        Ok(Prediction {
            label: self.metadata.class_label(instance.class_label)?,
            confidence: 1.0,
        })
    }
}
