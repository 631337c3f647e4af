/// Outcome of predicting one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    /// Position of the instance in its source collection.
    pub index: usize,
    /// Zero-based fold that held the instance out, in cross-validation.
    pub fold: Option<usize>,
    pub actual: String,
    pub predicted: String,
    pub confidence: f64,
}

impl PredictionRecord {
    #[inline]
    pub fn is_correct(&self) -> bool {
        self.actual == self.predicted
    }
}
