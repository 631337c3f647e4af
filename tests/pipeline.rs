//! End-to-end runs from ARFF files through training to the text reports.

use std::io::Write;
use std::sync::Arc;

use arff_logreg::arff::{load_dataset, load_dataset_with_test};
use arff_logreg::classifiers::{LearningParameters, LogisticRegression};
use arff_logreg::evaluation::{write_cross_validation, write_holdout};
use arff_logreg::tasks::{CrossValidationEvaluator, HoldoutEvaluator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

const NEGATIVES: [f64; 10] = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 1.2];
const POSITIVES: [f64; 10] = [6.0, 6.5, 7.0, 7.5, 8.0, 8.5, 9.0, 9.5, 10.0, 7.2];

fn arff_file(text: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(text.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn separable() -> NamedTempFile {
    let mut text = String::from(
        "% synthetic, one feature\n@relation separable\n@attribute x numeric\n@attribute class {neg, pos}\n@data\n",
    );
    for (n, p) in NEGATIVES.iter().zip(POSITIVES.iter()) {
        text.push_str(&format!("{n},neg\n{p},pos\n"));
    }
    arff_file(&text)
}

fn params() -> LearningParameters {
    LearningParameters {
        learning_rate: 0.5,
        epochs: 200,
    }
}

#[test]
fn two_point_scenario() {
    let f = arff_file(
        "@relation tiny\n@attribute x numeric\n@attribute class {neg,pos}\n@data\n0.0,neg\n10.0,pos\n",
    );
    let d = load_dataset(f.path()).unwrap();
    let lr = LogisticRegression::new(
        d.shared_metadata(),
        LearningParameters {
            learning_rate: 0.1,
            epochs: 50,
        },
    );
    let report = HoldoutEvaluator::new(lr).run(&d).unwrap();

    let mut out = Vec::new();
    write_holdout(&mut out, &report).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("weights[0] = "));
    assert!(text.contains("  1: Actual: neg  Predicted: neg  Confidence: 0.3"));
    assert!(text.contains("  2: Actual: pos  Predicted: pos  Confidence: 0.9"));
    assert!(text.ends_with(
        "Number of correctly classified: 2  Total number of test instances: 2\nAccuracy: 100.000000%\n"
    ));
}

#[test]
fn single_split_on_training_data() {
    let f = separable();
    let d = load_dataset(f.path()).unwrap();
    let report = HoldoutEvaluator::new(LogisticRegression::new(d.shared_metadata(), params()))
        .run(&d)
        .unwrap();
    assert_eq!(report.accuracy.total(), 20);
    assert_eq!(report.accuracy.correct(), 20);
    assert_eq!(report.learner.weights().len(), 1);
}

#[test]
fn single_split_scores_separate_test_file() {
    let train = separable();
    let test = arff_file("@relation ignored\n@data\n%Testing\n-1,neg\n12,pos\n5.5,neg\n");
    let d = load_dataset_with_test(train.path(), test.path()).unwrap();
    let report = HoldoutEvaluator::new(LogisticRegression::new(d.shared_metadata(), params()))
        .run(&d)
        .unwrap();

    assert_eq!(report.records.len(), 3);
    assert_eq!(report.records[0].predicted, "neg");
    assert_eq!(report.records[1].predicted, "pos");
}

#[test]
fn stratified_cross_validation() {
    let f = separable();
    let d = load_dataset(f.path()).unwrap();
    let metadata = d.shared_metadata();
    let mut cv = CrossValidationEvaluator::new(5, || {
        LogisticRegression::new(Arc::clone(&metadata), params())
    });
    let report = cv.run(&d, &mut StdRng::seed_from_u64(2024)).unwrap();

    assert_eq!(report.folds.len(), 5);
    for fold in &report.folds {
        assert_eq!(fold.test.total(), 4);
        assert_eq!(fold.train.total(), 16);
    }
    assert_eq!(report.test_accuracy().total(), 20);
    assert!(report.test_accuracy().correct() >= 18);

    let mut out = Vec::new();
    write_cross_validation(&mut out, &report).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5 + 1 + 1 + 20);
    assert!(lines[5].starts_with("Average: Train accuracy: "));
    assert_eq!(lines[6], "");
    assert!(lines[7].starts_with("  1: Fold: "));
    assert!(lines[26].starts_with(" 20: Fold: "));
}
