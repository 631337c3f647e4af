use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row: insufficient fields (line {line}: expected {expected}, found {found})")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("malformed {directive} directive on line {line}")]
    MalformedDirective { line: usize, directive: String },

    #[error("value '{value}' is not declared for nominal feature '{feature}'")]
    UnknownNominalValue { feature: String, value: String },

    #[error("value '{value}' of feature '{feature}' is not a number")]
    InvalidNumber { feature: String, value: String },

    #[error("internal value {value} has no counterpart in feature '{feature}'")]
    InternalValueOutOfRange { feature: String, value: f64 },

    #[error("no class attribute declared before @data")]
    MissingClassFeature,
}
