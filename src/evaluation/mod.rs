mod accuracy;
mod prediction_record;
mod report;
mod stratified_folds;

pub use accuracy::Accuracy;
pub use prediction_record::PredictionRecord;
pub use report::{write_cross_validation, write_holdout};
pub use stratified_folds::{FoldSplit, StratifiedFolds};
