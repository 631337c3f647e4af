use crate::core::features::Feature;
use crate::error::DatasetError;
use crate::utils::file_parsing::quote_if_needed;

#[derive(Debug, Clone, PartialEq)]
pub struct NumericFeature {
    pub index: usize,
    pub name: String,
}

impl NumericFeature {
    pub fn new<N: Into<String>>(index: usize, name: N) -> NumericFeature {
        NumericFeature {
            index,
            name: name.into(),
        }
    }
}

impl Feature for NumericFeature {
    fn index(&self) -> Option<usize> {
        Some(self.index)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn range(&self) -> usize {
        0
    }

    fn value_to_internal(&self, value: &str) -> Result<f64, DatasetError> {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| DatasetError::InvalidNumber {
                feature: self.name.clone(),
                value: value.to_string(),
            })
    }

    fn internal_to_value(&self, internal: f64) -> Result<String, DatasetError> {
        Ok(internal.to_string())
    }

    fn describe(&self) -> String {
        format!("@attribute {} numeric", quote_if_needed(&self.name))
    }
}
