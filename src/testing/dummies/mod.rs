mod metadata;

pub use metadata::{metadata_mixed, metadata_numeric};
