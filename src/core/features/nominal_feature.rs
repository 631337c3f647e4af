use std::collections::HashMap;

use crate::core::features::Feature;
use crate::error::DatasetError;
use crate::utils::file_parsing::quote_if_needed;

/// Feature whose values come from a declared, ordered domain. A value is
/// stored internally as its zero-based position in that domain.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalFeature {
    pub index: Option<usize>,
    pub name: String,
    pub values: Vec<String>,
    label_to_index: HashMap<String, usize>,
}

impl NominalFeature {
    /// Builds the feature from its declared domain. A value declared twice
    /// keeps the position of its first declaration.
    pub fn new<N: Into<String>>(index: Option<usize>, name: N, domain: Vec<String>) -> Self {
        let mut values = Vec::with_capacity(domain.len());
        let mut label_to_index = HashMap::with_capacity(domain.len());
        for value in domain {
            if label_to_index.contains_key(&value) {
                continue;
            }
            label_to_index.insert(value.clone(), values.len());
            values.push(value);
        }
        Self {
            index,
            name: name.into(),
            values,
            label_to_index,
        }
    }

    pub fn index_of_value(&self, value: &str) -> Option<usize> {
        self.label_to_index.get(value).copied()
    }

    pub fn value_at(&self, position: usize) -> Option<&str> {
        self.values.get(position).map(String::as_str)
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (usize, &String)> {
        self.values.iter().enumerate()
    }
}

impl Feature for NominalFeature {
    fn index(&self) -> Option<usize> {
        self.index
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn range(&self) -> usize {
        self.values.len()
    }

    fn value_to_internal(&self, value: &str) -> Result<f64, DatasetError> {
        self.index_of_value(value)
            .map(|position| position as f64)
            .ok_or_else(|| DatasetError::UnknownNominalValue {
                feature: self.name.clone(),
                value: value.to_string(),
            })
    }

    fn internal_to_value(&self, internal: f64) -> Result<String, DatasetError> {
        let out_of_range = || DatasetError::InternalValueOutOfRange {
            feature: self.name.clone(),
            value: internal,
        };
        if !internal.is_finite() || internal < 0.0 || internal.fract() != 0.0 {
            return Err(out_of_range());
        }
        self.value_at(internal as usize)
            .map(str::to_string)
            .ok_or_else(out_of_range)
    }

    fn describe(&self) -> String {
        let domain: Vec<String> = self.values.iter().map(|v| quote_if_needed(v)).collect();
        format!(
            "@attribute {} {{ {} }}",
            quote_if_needed(&self.name),
            domain.join(", ")
        )
    }
}
