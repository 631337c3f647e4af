use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;

use crate::classifiers::LearningParameters;

const DEFAULT_FOLDS: usize = 1;
const DEFAULT_LEARNING_RATE: f64 = 0.1;
const DEFAULT_EPOCHS: usize = 100;

fn default_folds() -> usize {
    DEFAULT_FOLDS
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

fn default_epochs() -> usize {
    DEFAULT_EPOCHS
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum EvaluationMode {
    SingleSplit,
    StratifiedKFold(usize),
}

/// Everything one run needs: input files, evaluation mode, learner settings
/// and the shuffle seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub dataset: PathBuf,

    #[serde(default)]
    pub test_dataset: Option<PathBuf>,

    /// `1` or less evaluates on a single split.
    #[serde(default = "default_folds")]
    pub folds: usize,

    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    #[serde(default = "default_epochs")]
    pub epochs: usize,

    /// Fixed seed for fold shuffling; drawn at random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn new<P: Into<PathBuf>>(dataset: P, folds: usize, learning_rate: f64, epochs: usize) -> Self {
        Self {
            dataset: dataset.into(),
            test_dataset: None,
            folds,
            learning_rate,
            epochs,
            seed: None,
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn mode(&self) -> EvaluationMode {
        if self.folds <= 1 {
            EvaluationMode::SingleSplit
        } else {
            EvaluationMode::StratifiedKFold(self.folds)
        }
    }

    pub fn learning_parameters(&self) -> LearningParameters {
        LearningParameters {
            learning_rate: self.learning_rate,
            epochs: self.epochs,
        }
    }
}
