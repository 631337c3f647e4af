use log::info;

use crate::classifiers::Classifier;
use crate::core::{Dataset, Instance};
use crate::error::DatasetError;
use crate::evaluation::{Accuracy, PredictionRecord};

/// Result of a single-split run; keeps the trained learner for inspection.
#[derive(Debug)]
pub struct HoldoutReport<C> {
    pub learner: C,
    pub records: Vec<PredictionRecord>,
    pub accuracy: Accuracy,
}

/// Trains one learner on the whole training set and scores it.
///
/// Predictions are made on the test set when the dataset has one, otherwise
/// on the training set itself.
pub struct HoldoutEvaluator<C: Classifier> {
    learner: C,
}

impl<C: Classifier> HoldoutEvaluator<C> {
    pub fn new(learner: C) -> Self {
        Self { learner }
    }

    pub fn run(mut self, dataset: &Dataset) -> Result<HoldoutReport<C>, DatasetError> {
        let train: Vec<&Instance> = dataset.train_set().iter().collect();
        self.learner.train(&train);

        let targets = if dataset.test_set().is_empty() {
            dataset.train_set()
        } else {
            dataset.test_set()
        };

        let metadata = dataset.metadata();
        let mut records = Vec::with_capacity(targets.len());
        let mut accuracy = Accuracy::default();
        for (index, instance) in targets.iter().enumerate() {
            let prediction = self.learner.predict(instance)?;
            let record = PredictionRecord {
                index,
                fold: None,
                actual: instance.class_value(metadata)?,
                predicted: prediction.label,
                confidence: prediction.confidence,
            };
            accuracy.record(record.is_correct());
            records.push(record);
        }

        info!(
            "trained on {} instances, scored {}: accuracy {accuracy}",
            train.len(),
            targets.len()
        );
        Ok(HoldoutReport {
            learner: self.learner,
            records,
            accuracy,
        })
    }
}
