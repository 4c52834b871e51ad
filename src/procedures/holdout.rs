use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{Fold, Procedure};
use crate::error::{Error, Result};

/// tolerance for float noise in `(1 - n) * rows`, e.g. `(1.0 - 0.7) * 10.0 == 3.0000000000000004`
const SIZE_TOLERANCE: f64 = 1e-9;

/// A single shuffled train/test split.
///
/// The rows are permuted with a ChaCha8 generator seeded from `seed`; the first
/// `ceil((1 - train_fraction) * n_rows)` rows of the permutation form the test set and the
/// remaining rows form the training set.
#[derive(Debug, Clone)]
pub struct Holdout {
    train_fraction: f64,
    seed: u64,
    fold: Fold,
}

impl Holdout {
    pub fn new(n_rows: usize, train_fraction: f64, seed: u64) -> Result<Self> {
        if !(0.0..=1.0).contains(&train_fraction) {
            return Err(Error::InvalidFraction(train_fraction));
        }

        let (n_train, n_test) = split_sizes(n_rows, train_fraction);

        let mut permutation: Vec<usize> = (0..n_rows).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        permutation.shuffle(&mut rng);

        let trainset = permutation.split_off(n_test);
        debug_assert_eq!(trainset.len(), n_train);

        Ok(Holdout {
            train_fraction,
            seed,
            fold: Fold {
                trainset,
                testset: permutation,
            },
        })
    }

    pub fn train_fraction(&self) -> f64 {
        self.train_fraction
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn fold(&self) -> &Fold {
        &self.fold
    }

    pub fn into_fold(self) -> Fold {
        self.fold
    }
}

impl Procedure for Holdout {
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Fold> + 'a> {
        Box::new(Some(&self.fold).into_iter())
    }
}

/// number of (train, test) rows for a given fraction of training rows
fn split_sizes(n_rows: usize, train_fraction: f64) -> (usize, usize) {
    let raw = (1.0 - train_fraction) * n_rows as f64;
    let n_test = ((raw - SIZE_TOLERANCE).ceil().max(0.0) as usize).min(n_rows);
    (n_rows - n_test, n_test)
}
