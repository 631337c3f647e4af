use std::sync::Arc;

use crate::core::dataset_metadata::DatasetMetadata;
use crate::core::features::Feature;
use crate::core::instance::Instance;
use crate::error::DatasetError;
use crate::utils::file_parsing::quote_if_needed;

/// Schema plus the instances read against it. Training and test rows live in
/// separate collections and are never shared between them.
#[derive(Debug, Clone)]
pub struct Dataset {
    metadata: Arc<DatasetMetadata>,
    train_set: Vec<Instance>,
    test_set: Vec<Instance>,
}

impl Dataset {
    pub fn new(metadata: DatasetMetadata) -> Dataset {
        Dataset {
            metadata: Arc::new(metadata),
            train_set: Vec::new(),
            test_set: Vec::new(),
        }
    }

    pub fn metadata(&self) -> &DatasetMetadata {
        &self.metadata
    }

    /// Shared handle for learners that outlive a borrow of the dataset.
    pub fn shared_metadata(&self) -> Arc<DatasetMetadata> {
        Arc::clone(&self.metadata)
    }

    pub fn train_set(&self) -> &[Instance] {
        &self.train_set
    }

    pub fn test_set(&self) -> &[Instance] {
        &self.test_set
    }

    pub fn push_train(&mut self, instance: Instance) {
        debug_assert_eq!(instance.number_of_features(), self.metadata.number_of_features());
        self.train_set.push(instance);
    }

    pub fn push_test(&mut self, instance: Instance) {
        debug_assert_eq!(instance.number_of_features(), self.metadata.number_of_features());
        self.test_set.push(instance);
    }

    /// Renders the whole dataset as an ARFF document. Training and test rows
    /// follow `%Training` and `%Testing` markers, which read back as comments.
    pub fn to_arff(&self) -> Result<String, DatasetError> {
        let m = &self.metadata;
        let mut lines = Vec::with_capacity(m.features.len() + self.train_set.len() + self.test_set.len() + 5);
        lines.push(format!("@relation {}", quote_if_needed(&m.name)));
        lines.extend(m.features.iter().map(Feature::describe));
        lines.push(m.class_feature.describe());
        lines.push("@data".to_string());

        lines.push("%Training".to_string());
        for instance in &self.train_set {
            lines.push(instance.render(m)?);
        }
        lines.push("%Testing".to_string());
        for instance in &self.test_set {
            lines.push(instance.render(m)?);
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}
