//! Validation procedures

mod holdout;

pub use self::holdout::Holdout;

/// Validation procedures support iteration over train/test folds
pub trait Procedure {
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Fold> + 'a>;
}

/// A single fold, consisting of a training set and a testing set of row indices
#[derive(Debug, Clone, PartialEq)]
pub struct Fold {
    pub trainset: Vec<usize>,
    pub testset: Vec<usize>,
}

impl Fold {
    pub fn new() -> Self {
        Fold {
            trainset: Vec::new(),
            testset: Vec::new(),
        }
    }

    /// total number of rows covered by this fold
    pub fn len(&self) -> usize {
        self.trainset.len() + self.testset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Fold {
    fn default() -> Self {
        Fold::new()
    }
}
