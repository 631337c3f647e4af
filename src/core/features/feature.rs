use crate::core::features::{NominalFeature, NumericFeature};
use crate::error::DatasetError;

/// Column semantics: how raw ARFF tokens map to and from the numeric
/// representation stored in an [`Instance`](crate::core::Instance).
pub trait Feature {
    /// Position in the feature vector, or `None` for the class feature,
    /// which lives outside the vector.
    fn index(&self) -> Option<usize>;

    fn name(&self) -> &str;

    /// Number of distinct values the feature can take; zero when unbounded.
    fn range(&self) -> usize;

    fn value_to_internal(&self, value: &str) -> Result<f64, DatasetError>;

    fn internal_to_value(&self, internal: f64) -> Result<String, DatasetError>;

    /// ARFF declaration line for this feature.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureKind {
    Numeric(NumericFeature),
    Nominal(NominalFeature),
}

impl FeatureKind {
    #[inline]
    fn inner(&self) -> &dyn Feature {
        match self {
            FeatureKind::Numeric(numeric) => numeric,
            FeatureKind::Nominal(nominal) => nominal,
        }
    }
}

impl From<NumericFeature> for FeatureKind {
    fn from(feature: NumericFeature) -> Self {
        FeatureKind::Numeric(feature)
    }
}

impl From<NominalFeature> for FeatureKind {
    fn from(feature: NominalFeature) -> Self {
        FeatureKind::Nominal(feature)
    }
}

impl Feature for FeatureKind {
    fn index(&self) -> Option<usize> {
        self.inner().index()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn range(&self) -> usize {
        self.inner().range()
    }

    fn value_to_internal(&self, value: &str) -> Result<f64, DatasetError> {
        self.inner().value_to_internal(value)
    }

    fn internal_to_value(&self, internal: f64) -> Result<String, DatasetError> {
        self.inner().internal_to_value(internal)
    }

    fn describe(&self) -> String {
        self.inner().describe()
    }
}
