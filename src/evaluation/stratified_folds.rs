use std::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::Instance;

const POSITIVE_THRESHOLD: f64 = 0.5;

/// Train/test index lists for one fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Stratified partition of instance indices into `k` folds.
///
/// Indices are grouped by class (label above 0.5 or not) and each group is
/// shuffled once. Fold `i` tests the contiguous slice
/// `[m*i/k, m*(i+1)/k)` of every group of size `m`, so each fold's test set
/// keeps the class ratio and every index is tested by exactly one fold.
#[derive(Debug, Clone)]
pub struct StratifiedFolds {
    groups: [Vec<usize>; 2],
    folds: usize,
}

impl StratifiedFolds {
    /// A fold count of zero is treated as one.
    pub fn new<R: Rng + ?Sized>(instances: &[Instance], folds: usize, rng: &mut R) -> Self {
        let (mut positive, mut negative): (Vec<usize>, Vec<usize>) = (0..instances.len())
            .partition(|&i| instances[i].class_label > POSITIVE_THRESHOLD);
        negative.shuffle(rng);
        positive.shuffle(rng);
        Self {
            groups: [negative, positive],
            folds: folds.max(1),
        }
    }

    /// Shuffled index groups, negatives first.
    pub fn groups(&self) -> &[Vec<usize>; 2] {
        &self.groups
    }

    #[inline]
    fn test_range(&self, group_len: usize, fold: usize) -> Range<usize> {
        let start = group_len * fold / self.folds;
        let end = group_len * (fold + 1) / self.folds;
        start..end
    }

    /// Split for `fold` in group order: test slices of both groups, and
    /// everything else as training data.
    pub fn split(&self, fold: usize) -> FoldSplit {
        let mut train = Vec::new();
        let mut test = Vec::new();
        for group in &self.groups {
            let range = self.test_range(group.len(), fold);
            for (pos, &index) in group.iter().enumerate() {
                if range.contains(&pos) {
                    test.push(index);
                } else {
                    train.push(index);
                }
            }
        }
        FoldSplit { train, test }
    }

    /// Like [`split`](Self::split), with both lists shuffled so that
    /// presentation order does not follow the class grouping.
    pub fn shuffled_split<R: Rng + ?Sized>(&self, fold: usize, rng: &mut R) -> FoldSplit {
        let mut split = self.split(fold);
        split.train.shuffle(rng);
        split.test.shuffle(rng);
        split
    }
}
