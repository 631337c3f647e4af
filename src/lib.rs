pub mod arff;
pub mod classifiers;
pub mod config;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
