use std::fmt::Display;
use std::io::{Result, Write};

use crate::evaluation::PredictionRecord;
use crate::tasks::{CrossValidationReport, HoldoutReport};

fn write_record<W: Write>(w: &mut W, record: &PredictionRecord) -> Result<()> {
    write!(w, "{:>3}: ", record.index + 1)?;
    if let Some(fold) = record.fold {
        write!(w, "Fold: {}  ", fold + 1)?;
    }
    writeln!(
        w,
        "Actual: {}  Predicted: {}  Confidence: {:.6}",
        record.actual, record.predicted, record.confidence
    )
}

/// Weight dump, one line per scored instance, then the accuracy summary.
pub fn write_holdout<W: Write, C: Display>(w: &mut W, report: &HoldoutReport<C>) -> Result<()> {
    write!(w, "{}", report.learner)?;
    writeln!(w, "<Predictions for the Test Set Instances>")?;
    for record in &report.records {
        write_record(w, record)?;
    }
    writeln!(
        w,
        "Number of correctly classified: {}  Total number of test instances: {}",
        report.accuracy.correct(),
        report.accuracy.total()
    )?;
    writeln!(w, "Accuracy: {:.6}%", report.accuracy.percentage())
}

/// Per-fold summaries, pooled averages, a blank line, then every instance
/// with the fold that tested it.
pub fn write_cross_validation<W: Write>(w: &mut W, report: &CrossValidationReport) -> Result<()> {
    for summary in &report.folds {
        writeln!(
            w,
            "Fold {}: Train accuracy: {}  Test accuracy: {}",
            summary.fold + 1,
            summary.train,
            summary.test
        )?;
    }
    writeln!(
        w,
        "Average: Train accuracy: {}  Test accuracy: {}",
        report.train_accuracy(),
        report.test_accuracy()
    )?;
    writeln!(w)?;
    for record in &report.records {
        write_record(w, record)?;
    }
    Ok(())
}
