pub mod classifier;
pub mod logistic_regression;

pub use classifier::{Classifier, Prediction};
pub use logistic_regression::{LearningParameters, LogisticRegression};
