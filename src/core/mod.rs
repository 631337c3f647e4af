pub mod dataset;
pub mod dataset_metadata;
pub mod features;
pub mod instance;

pub use dataset::Dataset;
pub use dataset_metadata::{DatasetMetadata, MetadataBuilder};
pub use instance::Instance;
