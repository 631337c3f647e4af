use log::{debug, info};
use rand::Rng;

use crate::classifiers::Classifier;
use crate::core::{Dataset, Instance};
use crate::error::DatasetError;
use crate::evaluation::{Accuracy, PredictionRecord, StratifiedFolds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldSummary {
    /// Zero-based fold number.
    pub fold: usize,
    pub train: Accuracy,
    pub test: Accuracy,
}

#[derive(Debug, Clone)]
pub struct CrossValidationReport {
    pub folds: Vec<FoldSummary>,
    /// One record per instance, in dataset order, carrying the fold that
    /// tested it.
    pub records: Vec<PredictionRecord>,
}

impl CrossValidationReport {
    /// Training accuracy pooled over every fold's predictions.
    pub fn train_accuracy(&self) -> Accuracy {
        self.pooled(|f| f.train)
    }

    /// Test accuracy pooled over every fold's predictions.
    pub fn test_accuracy(&self) -> Accuracy {
        self.pooled(|f| f.test)
    }

    fn pooled(&self, pick: impl Fn(&FoldSummary) -> Accuracy) -> Accuracy {
        let mut total = Accuracy::default();
        for fold in &self.folds {
            total.merge(pick(fold));
        }
        total
    }
}

/// Stratified k-fold cross-validation over a dataset's training set.
///
/// Every fold gets a fresh learner from `make_learner`. All shuffles draw
/// from the generator passed to [`run`](Self::run), in fold order, so a
/// seeded generator reproduces the whole run.
pub struct CrossValidationEvaluator<F> {
    folds: usize,
    make_learner: F,
}

impl<C, F> CrossValidationEvaluator<F>
where
    C: Classifier,
    F: FnMut() -> C,
{
    pub fn new(folds: usize, make_learner: F) -> Self {
        Self {
            folds: folds.max(1),
            make_learner,
        }
    }

    pub fn run<R: Rng + ?Sized>(
        &mut self,
        dataset: &Dataset,
        rng: &mut R,
    ) -> Result<CrossValidationReport, DatasetError> {
        let instances = dataset.train_set();
        let metadata = dataset.metadata();
        let partition = StratifiedFolds::new(instances, self.folds, rng);

        let mut records: Vec<Option<PredictionRecord>> = vec![None; instances.len()];
        let mut summaries = Vec::with_capacity(self.folds);

        for fold in 0..self.folds {
            let split = partition.shuffled_split(fold, rng);
            debug!(
                "fold {}: {} training, {} test instances",
                fold + 1,
                split.train.len(),
                split.test.len()
            );

            let train: Vec<&Instance> = split.train.iter().map(|&i| &instances[i]).collect();
            let mut learner = (self.make_learner)();
            learner.train(&train);

            let mut train_accuracy = Accuracy::default();
            for instance in &train {
                let prediction = learner.predict(instance)?;
                train_accuracy.record(prediction.label == instance.class_value(metadata)?);
            }

            let mut test_accuracy = Accuracy::default();
            for &index in &split.test {
                let instance = &instances[index];
                let prediction = learner.predict(instance)?;
                let record = PredictionRecord {
                    index,
                    fold: Some(fold),
                    actual: instance.class_value(metadata)?,
                    predicted: prediction.label,
                    confidence: prediction.confidence,
                };
                test_accuracy.record(record.is_correct());
                records[index] = Some(record);
            }

            info!(
                "fold {}: train accuracy {train_accuracy}, test accuracy {test_accuracy}",
                fold + 1
            );
            summaries.push(FoldSummary {
                fold,
                train: train_accuracy,
                test: test_accuracy,
            });
        }

        let records: Vec<PredictionRecord> = records.into_iter().flatten().collect();
        debug_assert_eq!(records.len(), instances.len());
        Ok(CrossValidationReport {
            folds: summaries,
            records,
        })
    }
}
