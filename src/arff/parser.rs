use std::str::FromStr;

use log::debug;
use strum_macros::{Display, EnumString};

use crate::core::features::{Feature, NominalFeature, NumericFeature};
use crate::core::{Dataset, DatasetMetadata, Instance, MetadataBuilder};
use crate::error::DatasetError;
use crate::utils::file_parsing::{split_lines, strip_comment, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
enum Directive {
    #[strum(serialize = "@relation")]
    Relation,
    #[strum(serialize = "@attribute")]
    Attribute,
    #[strum(serialize = "@data")]
    Data,
}

/// Attribute types that declare a numeric feature; anything else starts a
/// nominal domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum NumericType {
    Numeric,
    Integer,
    Real,
}

const CLASS_FEATURE_NAME: &str = "class";

/// Reads ARFF text into a [`Dataset`].
///
/// Lines are numbered from 1 as given; comment-only and blank lines are
/// skipped. Header lines build the schema until `@data`, after which each
/// line is one instance. Extra tokens beyond the class value are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArffParser;

impl ArffParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_str(&self, text: &str) -> Result<Dataset, DatasetError> {
        self.parse_lines(split_lines(text))
    }

    /// Builds schema and training set from the lines of one ARFF document.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<Dataset, DatasetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = tokenized(lines);
        let mut builder = MetadataBuilder::default();

        let mut dataset = loop {
            let Some((line, tokens)) = rows.next() else {
                return builder.build().map(Dataset::new);
            };
            match Directive::from_str(&tokens[0]) {
                Ok(Directive::Relation) => {
                    let name = tokens.get(1).ok_or_else(|| malformed(line, Directive::Relation))?;
                    builder.set_relation_name(name.as_str());
                }
                Ok(Directive::Attribute) => declare_feature(&mut builder, line, &tokens)?,
                Ok(Directive::Data) => break Dataset::new(builder.build()?),
                Err(_) => debug!("ignoring header line {line}: '{}'", tokens[0]),
            }
        };

        for (line, tokens) in rows {
            let instance = parse_instance(dataset.metadata(), line, &tokens)?;
            dataset.push_train(instance);
        }
        Ok(dataset)
    }

    /// Appends the data rows of a second ARFF document to the test set.
    ///
    /// The document's header is only scanned for `@data`; its declarations
    /// are ignored and the dataset's existing schema decodes every row.
    pub fn parse_test_lines<I, S>(&self, dataset: &mut Dataset, lines: I) -> Result<(), DatasetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = tokenized(lines);
        let found_data = rows.any(|(_, tokens)| {
            matches!(Directive::from_str(&tokens[0]), Ok(Directive::Data))
        });
        if !found_data {
            return Ok(());
        }
        for (line, tokens) in rows {
            let instance = parse_instance(dataset.metadata(), line, &tokens)?;
            dataset.push_test(instance);
        }
        Ok(())
    }
}

/// Numbered, tokenized lines with comments removed; lines without tokens are
/// dropped.
fn tokenized<I, S>(lines: I) -> impl Iterator<Item = (usize, Vec<String>)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().enumerate().filter_map(|(i, line)| {
        let tokens = tokenize(strip_comment(line.as_ref()));
        if tokens.is_empty() {
            None
        } else {
            Some((i + 1, tokens))
        }
    })
}

#[inline]
fn malformed(line: usize, directive: Directive) -> DatasetError {
    DatasetError::MalformedDirective {
        line,
        directive: directive.to_string(),
    }
}

fn declare_feature(
    builder: &mut MetadataBuilder,
    line: usize,
    tokens: &[String],
) -> Result<(), DatasetError> {
    if tokens.len() < 3 {
        return Err(malformed(line, Directive::Attribute));
    }
    let name = tokens[1].as_str();
    let domain = || tokens[2..].to_vec();

    if name.eq_ignore_ascii_case(CLASS_FEATURE_NAME) {
        builder.set_class_feature(NominalFeature::new(None, name, domain()));
    } else if NumericType::from_str(&tokens[2]).is_ok() {
        let index = builder.next_index();
        builder.push_feature(NumericFeature::new(index, name));
    } else {
        let index = builder.next_index();
        builder.push_feature(NominalFeature::new(Some(index), name, domain()));
    }
    Ok(())
}

/// Converts one data row. The first `n` tokens fill the feature vector in
/// schema order and token `n` is the class value.
pub fn parse_instance(
    metadata: &DatasetMetadata,
    line: usize,
    tokens: &[String],
) -> Result<Instance, DatasetError> {
    let n = metadata.number_of_features();
    if tokens.len() < n + 1 {
        return Err(DatasetError::MalformedRow {
            line,
            expected: n + 1,
            found: tokens.len(),
        });
    }

    let feature_vector = metadata
        .features
        .iter()
        .zip(tokens)
        .map(|(feature, token)| feature.value_to_internal(token))
        .collect::<Result<Vec<_>, _>>()?;
    let class_label = metadata.class_feature.value_to_internal(&tokens[n])?;

    Ok(Instance::new(feature_vector, class_label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::FeatureKind;

    const WEATHER: &str = "\
% The weather data
@RELATION weather

@attribute outlook {sunny, overcast, rainy}
@attribute temperature NUMERIC
@attribute humidity real
@attribute windy {TRUE, FALSE}
@Attribute Class {yes, no} % trailing comment

@DATA
sunny,85,85,FALSE,no
overcast,83,86,FALSE,yes
% a comment between rows
rainy,70,96.5,TRUE,yes
";

    #[test]
    fn parses_header_and_rows() {
        let d = ArffParser::new().parse_str(WEATHER).unwrap();
        let m = d.metadata();

        assert_eq!(m.relation_name(), "weather");
        assert_eq!(m.number_of_features(), 4);
        assert_eq!(m.features.len(), m.number_of_features());
        assert_eq!(m.number_of_classes(), 2);
        assert_eq!(m.class_feature.name, "Class");
        assert_eq!(m.class_feature.index, None);

        assert!(matches!(m.features[0], FeatureKind::Nominal(_)));
        assert!(matches!(m.features[1], FeatureKind::Numeric(_)));
        assert!(matches!(m.features[2], FeatureKind::Numeric(_)));
        for (i, f) in m.features.iter().enumerate() {
            assert_eq!(f.index(), Some(i));
        }

        assert_eq!(d.train_set().len(), 3);
        assert!(d.test_set().is_empty());
        assert_eq!(d.train_set()[0], Instance::new(vec![0.0, 85.0, 85.0, 1.0], 1.0));
        assert_eq!(d.train_set()[2], Instance::new(vec![2.0, 70.0, 96.5, 0.0], 0.0));
        for inst in d.train_set() {
            assert_eq!(inst.number_of_features(), m.number_of_features());
        }
    }

    #[test]
    fn class_may_be_declared_before_features() {
        let text = "@relation r\n@attribute class {a,b}\n@attribute x integer\n@data\n3,b\n";
        let d = ArffParser::new().parse_str(text).unwrap();
        assert_eq!(d.metadata().number_of_features(), 1);
        assert_eq!(d.train_set()[0], Instance::new(vec![3.0], 1.0));
    }

    #[test]
    fn quoted_values_are_single_tokens() {
        let text = "\
@relation 'two words'
@attribute city {'New York', Boston}
@attribute class {yes,no}
@data
'New York',yes
";
        let d = ArffParser::new().parse_str(text).unwrap();
        assert_eq!(d.metadata().relation_name(), "two words");
        assert_eq!(d.train_set()[0], Instance::new(vec![0.0], 0.0));
    }

    #[test]
    fn short_row_is_malformed() {
        let text = "@relation r\n@attribute x numeric\n@attribute y numeric\n@attribute class {a,b}\n@data\n1,2,a\n1,b\n";
        let err = ArffParser::new().parse_str(text).unwrap_err();
        match err {
            DatasetError::MalformedRow {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 7);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(
            ArffParser::new()
                .parse_str("@attribute class {a}\n@data\n\n")
                .is_ok()
        );
    }

    #[test]
    fn undeclared_value_is_rejected() {
        let text = "@relation r\n@attribute class {a,b}\n@data\nc\n";
        assert!(matches!(
            ArffParser::new().parse_str(text),
            Err(DatasetError::UnknownNominalValue { ref value, .. }) if value == "c"
        ));
    }

    #[test]
    fn missing_class_is_rejected_at_data() {
        let text = "@relation r\n@attribute x numeric\n@data\n1\n";
        assert!(matches!(
            ArffParser::new().parse_str(text),
            Err(DatasetError::MissingClassFeature)
        ));
    }

    #[test]
    fn truncated_directives_are_rejected() {
        assert!(matches!(
            ArffParser::new().parse_str("@relation\n"),
            Err(DatasetError::MalformedDirective { line: 1, .. })
        ));
        assert!(matches!(
            ArffParser::new().parse_str("@relation r\n@attribute x\n"),
            Err(DatasetError::MalformedDirective { line: 2, .. })
        ));
    }

    #[test]
    fn test_document_reuses_train_schema() {
        let mut d = ArffParser::new().parse_str(WEATHER).unwrap();
        let test_doc = "\
@relation something-else
@attribute only numeric
@data
%Testing
overcast,64,65,TRUE,yes
";
        ArffParser::new()
            .parse_test_lines(&mut d, split_lines(test_doc))
            .unwrap();
        assert_eq!(d.train_set().len(), 3);
        assert_eq!(d.test_set(), &[Instance::new(vec![1.0, 64.0, 65.0, 0.0], 0.0)]);
        assert_eq!(d.metadata().number_of_features(), 4);
    }

    #[test]
    fn test_document_rows_are_validated() {
        let mut d = ArffParser::new().parse_str(WEATHER).unwrap();
        let err = ArffParser::new()
            .parse_test_lines(&mut d, ["@data", "sunny,1"])
            .unwrap_err();
        assert!(matches!(err, DatasetError::MalformedRow { line: 2, .. }));
    }
}
