use crate::core::dataset_metadata::DatasetMetadata;
use crate::core::features::Feature;
use crate::error::DatasetError;
use crate::utils::file_parsing::quote_if_needed;

/// One data row in internal form: a feature vector aligned with
/// [`DatasetMetadata::features`] and an encoded class value.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub feature_vector: Vec<f64>,
    pub class_label: f64,
}

impl Instance {
    pub fn new(feature_vector: Vec<f64>, class_label: f64) -> Instance {
        Instance {
            feature_vector,
            class_label,
        }
    }

    pub fn number_of_features(&self) -> usize {
        self.feature_vector.len()
    }

    /// Decoded class label.
    pub fn class_value(&self, metadata: &DatasetMetadata) -> Result<String, DatasetError> {
        metadata.class_label(self.class_label)
    }

    /// ARFF data row: every feature decoded through its converter, class last.
    pub fn render(&self, metadata: &DatasetMetadata) -> Result<String, DatasetError> {
        let mut fields = Vec::with_capacity(self.feature_vector.len() + 1);
        for (feature, &value) in metadata.features.iter().zip(&self.feature_vector) {
            fields.push(quote_if_needed(&feature.internal_to_value(value)?));
        }
        fields.push(quote_if_needed(&self.class_value(metadata)?));
        Ok(fields.join(","))
    }
}
