use std::fmt::{Display, Formatter, Result};

/// Count of correct predictions out of all predictions made.
///
/// Merging adds counts, so a merged accuracy weighs every prediction
/// equally rather than averaging per-fold percentages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Accuracy {
    correct: usize,
    total: usize,
}

impl Accuracy {
    pub fn new(correct: usize, total: usize) -> Self {
        debug_assert!(correct <= total);
        Self { correct, total }
    }

    #[inline]
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    #[inline]
    pub fn merge(&mut self, other: Accuracy) {
        self.correct += other.correct;
        self.total += other.total;
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `100 * correct / total`, or NaN when nothing was recorded.
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            100.0 * self.correct as f64 / self.total as f64
        } else {
            f64::NAN
        }
    }
}

impl Display for Accuracy {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:.6}% ({}/{})",
            self.percentage(),
            self.correct,
            self.total
        )
    }
}

impl FromIterator<bool> for Accuracy {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut acc = Accuracy::default();
        iter.into_iter().for_each(|c| acc.record(c));
        acc
    }
}
