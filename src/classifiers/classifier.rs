use crate::core::Instance;
use crate::error::DatasetError;

/// Decoded class label together with the raw model output behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

pub trait Classifier {
    /// Fits the model to `instances`, visited in the given order.
    fn train(&mut self, instances: &[&Instance]);

    fn predict(&self, instance: &Instance) -> Result<Prediction, DatasetError>;
}
