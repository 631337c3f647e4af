use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::arff::ArffParser;
use crate::core::Dataset;
use crate::error::DatasetError;
use crate::utils::file_parsing::split_lines;

/// Reads raw bytes; only io failures count as an open error. Bytes that are
/// not valid UTF-8 (Latin-1 comments, say) decode to replacement characters.
fn read_text(path: &Path) -> Result<String, DatasetError> {
    let bytes = fs::read(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Loads an ARFF file into the training set of a new dataset.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let dataset = ArffParser::new().parse_lines(split_lines(&text))?;

    let m = dataset.metadata();
    info!(
        "loaded '{}' from {}: {} features, {} classes, {} instances",
        m.relation_name(),
        path.display(),
        m.number_of_features(),
        m.number_of_classes(),
        dataset.train_set().len()
    );
    Ok(dataset)
}

/// Loads a training file, then fills the test set from a second file that
/// shares its schema.
///
/// A test file that cannot be opened is skipped with a warning and the
/// train-only dataset is returned. Parse errors in either file are returned.
pub fn load_dataset_with_test<P, Q>(train: P, test: Q) -> Result<Dataset, DatasetError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut dataset = load_dataset(train)?;
    let test = test.as_ref();

    let text = match read_text(test) {
        Ok(text) => text,
        Err(e) => {
            warn!("skipping test file: {e}");
            return Ok(dataset);
        }
    };
    ArffParser::new().parse_test_lines(&mut dataset, split_lines(&text))?;
    info!(
        "loaded {} test instances from {}",
        dataset.test_set().len(),
        test.display()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TRAIN: &str = "@relation r\r\n@attribute x numeric\r\n@attribute class {neg,pos}\r\n@data\r\n0,neg\r\n10,pos";

    fn file_with(text: &str) -> NamedTempFile {
        file_with_bytes(text.as_bytes())
    }

    fn file_with_bytes(bytes: &[u8]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn loads_crlf_file_without_trailing_newline() {
        let f = file_with(TRAIN);
        let d = load_dataset(f.path()).unwrap();
        assert_eq!(d.train_set().len(), 2);
        assert_eq!(d.train_set()[1].class_label, 1.0);
    }

    #[test]
    fn missing_train_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.arff");
        match load_dataset(&missing) {
            Err(DatasetError::Open { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected open error, got {other:?}"),
        }
        assert!(load_dataset_with_test(&missing, &missing).is_err());
    }

    #[test]
    fn missing_test_file_keeps_train_data() {
        let f = file_with(TRAIN);
        let dir = tempfile::tempdir().unwrap();
        let d = load_dataset_with_test(f.path(), dir.path().join("nope.arff")).unwrap();
        assert_eq!(d.train_set().len(), 2);
        assert!(d.test_set().is_empty());
    }

    #[test]
    fn test_file_fills_test_set() {
        let train = file_with(TRAIN);
        let test = file_with("@data\n5,pos\n-5,neg\n");
        let d = load_dataset_with_test(train.path(), test.path()).unwrap();
        assert_eq!(d.train_set().len(), 2);
        assert_eq!(d.test_set().len(), 2);
        assert_eq!(d.test_set()[1].feature_vector, vec![-5.0]);
    }

    #[test]
    fn malformed_test_file_is_an_error() {
        let train = file_with(TRAIN);
        let test = file_with("@data\nmaybe\n");
        assert!(matches!(
            load_dataset_with_test(train.path(), test.path()),
            Err(DatasetError::MalformedRow { .. })
        ));
    }

    #[test]
    fn latin1_train_file_loads() {
        let f = file_with_bytes(
            b"% caf\xe9\n@relation r\n@attribute x numeric\n@attribute class {neg,pos}\n@data\n0,neg\n10,pos\n",
        );
        let d = load_dataset(f.path()).unwrap();
        assert_eq!(d.metadata().relation_name(), "r");
        assert_eq!(d.train_set().len(), 2);
    }

    #[test]
    fn latin1_test_file_is_parsed_not_skipped() {
        let train = file_with(TRAIN);
        let test = file_with_bytes(b"@data\n% r\xe9sum\xe9\n5,pos\n-5,neg\n");
        let d = load_dataset_with_test(train.path(), test.path()).unwrap();
        assert_eq!(d.test_set().len(), 2);

        let bad = file_with_bytes(b"@data\n% r\xe9sum\xe9\n5,pos\n-5,neg\nbogus_row\n");
        assert!(matches!(
            load_dataset_with_test(train.path(), bad.path()),
            Err(DatasetError::MalformedRow { .. })
        ));
    }
}
