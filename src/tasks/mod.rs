mod cross_validation_evaluator;
mod holdout_evaluator;

pub use cross_validation_evaluator::{CrossValidationEvaluator, CrossValidationReport, FoldSummary};
pub use holdout_evaluator::{HoldoutEvaluator, HoldoutReport};
