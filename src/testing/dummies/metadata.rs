use crate::core::DatasetMetadata;
use crate::core::features::{FeatureKind, NominalFeature, NumericFeature};

fn binary_class() -> NominalFeature {
    NominalFeature::new(None, "class", vec!["neg".into(), "pos".into()])
}

/// `n` numeric features (`x` alone, or `x0..`) and a `{neg, pos}` class.
pub fn metadata_numeric(n: usize) -> DatasetMetadata {
    let features = (0..n)
        .map(|i| {
            let name = if n == 1 { "x".to_string() } else { format!("x{i}") };
            FeatureKind::from(NumericFeature::new(i, name))
        })
        .collect();
    DatasetMetadata::new("numeric".into(), features, binary_class())
}

/// Numeric `x`, nominal `colour {red, green}`, class `{neg, pos}`.
pub fn metadata_mixed() -> DatasetMetadata {
    let features: Vec<FeatureKind> = vec![
        NumericFeature::new(0, "x").into(),
        NominalFeature::new(Some(1), "colour", vec!["red".into(), "green".into()]).into(),
    ];
    DatasetMetadata::new("mixed".into(), features, binary_class())
}
