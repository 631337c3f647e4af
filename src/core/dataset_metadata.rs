use crate::core::features::{Feature, FeatureKind, NominalFeature};
use crate::error::DatasetError;

/// Dataset schema: relation name, ordered features and the class feature.
///
/// `features[i]` describes position `i` of every feature vector. The class
/// feature is kept apart and never occupies a vector slot.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetMetadata {
    pub name: String,
    pub features: Vec<FeatureKind>,
    pub class_feature: NominalFeature,
}

impl DatasetMetadata {
    pub fn new(name: String, features: Vec<FeatureKind>, class_feature: NominalFeature) -> Self {
        Self {
            name,
            features,
            class_feature,
        }
    }

    pub fn relation_name(&self) -> &str {
        &self.name
    }

    pub fn number_of_features(&self) -> usize {
        self.features.len()
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_feature.range()
    }

    /// Decodes an internal class value into its declared label.
    pub fn class_label(&self, internal: f64) -> Result<String, DatasetError> {
        self.class_feature.internal_to_value(internal)
    }
}

/// Accumulates header declarations until `@data` freezes them.
#[derive(Debug, Default)]
pub struct MetadataBuilder {
    name: String,
    features: Vec<FeatureKind>,
    class_feature: Option<NominalFeature>,
}

impl MetadataBuilder {
    pub fn set_relation_name<N: Into<String>>(&mut self, name: N) {
        self.name = name.into();
    }

    /// Index the next ordinary feature will receive.
    pub fn next_index(&self) -> usize {
        self.features.len()
    }

    pub fn push_feature<F: Into<FeatureKind>>(&mut self, feature: F) {
        self.features.push(feature.into());
    }

    /// A later class declaration replaces an earlier one.
    pub fn set_class_feature(&mut self, feature: NominalFeature) {
        self.class_feature = Some(feature);
    }

    pub fn build(self) -> Result<DatasetMetadata, DatasetError> {
        let class_feature = self.class_feature.ok_or(DatasetError::MissingClassFeature)?;
        Ok(DatasetMetadata::new(self.name, self.features, class_feature))
    }
}
