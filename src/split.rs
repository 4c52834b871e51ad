//! Reproducible train/test partitioning of a labeled data set.

use crate::dataset::{ColumnData, DataSet};
use crate::error::{Error, Result};
use crate::procedures::{Fold, Holdout};

/// Seed used by [`split`], so that every model of an analysis sees the same partition.
pub const DEFAULT_SEED: u64 = 0;

/// Training and holdout features and targets
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub x_train: DataSet,
    pub x_test: DataSet,
    pub y_train: Vec<f64>,
    pub y_test: Vec<f64>,
}

impl Partition {
    pub fn n_train(&self) -> usize {
        self.y_train.len()
    }

    pub fn n_test(&self) -> usize {
        self.y_test.len()
    }
}

/// Split `data` into training and test partitions, assigning a fraction `n` of the rows to the
/// training set. Rows are shuffled with [`DEFAULT_SEED`].
///
/// ```
/// # use listing_price_eval::dataset::{Column, DataSet};
/// # use listing_price_eval::split::split;
/// let mut data = DataSet::new(vec![
///     Column::numeric("Odo", (0..10).map(|i| i as f64 * 1000.0).collect()),
///     Column::numeric("Price", (0..10).map(|i| i as f64).collect()),
/// ]).unwrap();
/// data.set_target("Price").unwrap();
///
/// let p = split(&data, 0.9).unwrap();
/// assert_eq!((p.n_train(), p.n_test()), (9, 1));
/// ```
pub fn split(data: &DataSet, n: f64) -> Result<Partition> {
    split_seeded(data, n, DEFAULT_SEED)
}

/// Like [`split`], with an explicit seed.
pub fn split_seeded(data: &DataSet, n: f64, seed: u64) -> Result<Partition> {
    if !(0.0..=1.0).contains(&n) {
        return Err(Error::InvalidFraction(n));
    }
    if data.n_rows() == 0 {
        return Err(Error::EmptyDataset);
    }

    let (x, target) = data.clone_split().ok_or(Error::MissingTargetColumn)?;
    let y = match target.data {
        ColumnData::Numeric(y) => y,
        ColumnData::Categorical(_) => return Err(Error::NonNumericColumn(target.name)),
    };
    if let Some(row) = y.iter().position(|v| v.is_nan()) {
        return Err(Error::MissingTargetValue { row });
    }

    let fold = Holdout::new(data.n_rows(), n, seed)?.into_fold();
    debug!(
        "split {} rows into {} train / {} test (seed {})",
        data.n_rows(),
        fold.trainset.len(),
        fold.testset.len(),
        seed
    );

    Ok(partition(&x, &y, &fold))
}

fn partition(x: &DataSet, y: &[f64], fold: &Fold) -> Partition {
    Partition {
        x_train: x.take_rows(&fold.trainset),
        x_test: x.take_rows(&fold.testset),
        y_train: fold.trainset.iter().map(|&i| y[i]).collect(),
        y_test: fold.testset.iter().map(|&i| y[i]).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Column;

    /// rows carry their own index in both the feature and the target column
    fn indexed(rows: usize) -> DataSet {
        let mut ds = DataSet::new(vec![
            Column::numeric("Row", (0..rows).map(|i| i as f64).collect()),
            Column::categorical("Make", (0..rows).map(|i| format!("make{}", i % 3)).collect()),
            Column::numeric("Price", (0..rows).map(|i| i as f64).collect()),
        ])
        .unwrap();
        ds.set_target("Price").unwrap();
        ds
    }

    fn rows_of(x: &DataSet) -> Vec<usize> {
        match x.column("Row").unwrap().data {
            ColumnData::Numeric(ref v) => v.iter().map(|&r| r as usize).collect(),
            _ => unreachable!(),
        }
    }

    #[test]
    fn ninety_percent_of_ten() {
        let p = split(&indexed(10), 0.9).unwrap();
        assert_eq!(p.x_train.n_rows(), 9);
        assert_eq!(p.x_test.n_rows(), 1);
        assert_eq!(p.y_train.len(), 9);
        assert_eq!(p.y_test.len(), 1);
    }

    #[test]
    fn target_is_excluded_from_features() {
        let p = split(&indexed(10), 0.5).unwrap();
        let names: Vec<_> = p.x_train.column_names().collect();
        assert_eq!(names, vec!["Row", "Make"]);
        assert_eq!(p.x_train.target(), None);
    }

    #[test]
    fn features_and_targets_stay_aligned() {
        let p = split(&indexed(25), 0.6).unwrap();
        let train: Vec<f64> = rows_of(&p.x_train).into_iter().map(|r| r as f64).collect();
        let test: Vec<f64> = rows_of(&p.x_test).into_iter().map(|r| r as f64).collect();
        assert_eq!(train, p.y_train);
        assert_eq!(test, p.y_test);
    }

    #[test]
    fn partition_covers_all_rows_once() {
        let data = indexed(31);
        for &n in &[0.0, 0.25, 0.5, 0.8, 0.9, 1.0] {
            let p = split(&data, n).unwrap();
            assert_eq!(p.n_train() + p.n_test(), 31);

            let mut all = rows_of(&p.x_train);
            all.extend(rows_of(&p.x_test));
            all.sort();
            assert_eq!(all, (0..31).collect::<Vec<_>>());
        }
    }

    #[test]
    fn deterministic() {
        let data = indexed(40);
        assert_eq!(split(&data, 0.7).unwrap(), split(&data, 0.7).unwrap());
        assert_ne!(
            split_seeded(&data, 0.7, 1).unwrap(),
            split_seeded(&data, 0.7, 2).unwrap()
        );
    }

    #[test]
    fn source_is_untouched() {
        let data = indexed(12);
        let before = data.clone();
        split(&data, 0.5).unwrap();
        assert_eq!(data, before);
    }

    #[test]
    fn errors() {
        match split(&indexed(10), 1.1) {
            Err(Error::InvalidFraction(n)) => assert_eq!(n, 1.1),
            other => panic!("unexpected {:?}", other),
        }

        match split(&indexed(0), 0.5) {
            Err(Error::EmptyDataset) => {}
            other => panic!("unexpected {:?}", other),
        }

        let no_target = DataSet::new(vec![Column::numeric("Price", vec![1.0, 2.0])]).unwrap();
        match split(&no_target, 0.5) {
            Err(Error::MissingTargetColumn) => {}
            other => panic!("unexpected {:?}", other),
        }

        let mut categorical = indexed(4);
        categorical.set_target("Make").unwrap();
        match split(&categorical, 0.5) {
            Err(Error::NonNumericColumn(name)) => assert_eq!(name, "Make"),
            other => panic!("unexpected {:?}", other),
        }

        let mut missing = DataSet::new(vec![Column::numeric(
            "Price",
            vec![1.0, ::std::f64::NAN, 3.0],
        )])
        .unwrap();
        missing.set_target("Price").unwrap();
        match split(&missing, 0.5) {
            Err(Error::MissingTargetValue { row: 1 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
