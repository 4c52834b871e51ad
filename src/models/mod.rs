//! Regression models that can be compared by the evaluation harness.
//!
//! Any algorithm implementing [`Regressor`] (fitting) and [`Predictor`] (prediction) can be
//! evaluated by a [`Session`](crate::session::Session).

mod linear_regression;
mod naive_linear_regression;

pub use self::linear_regression::{LinearModel, LinearRegression};
pub use self::naive_linear_regression::{NaiveLinearRegression, NaiveLinearRegressor};

use crate::dataset::FeatureMatrix;
use crate::error::{Error, Result};

/// Fitting capability: learn a model from training features and targets
pub trait Regressor {
    type Model: Predictor;

    fn fit(&self, x: &FeatureMatrix, y: &[f64]) -> Result<Self::Model>;
}

/// Prediction capability of a trained model
pub trait Predictor {
    /// predict target value for a single feature vector
    fn predict_one(&self, x: &[f64]) -> f64;

    /// predict one target value per row
    fn predict(&self, x: &FeatureMatrix) -> Vec<f64> {
        x.rows().map(|row| self.predict_one(row)).collect()
    }
}

/// common preconditions of all fitting procedures
pub(crate) fn check_training_data(x: &FeatureMatrix, y: &[f64]) -> Result<()> {
    if x.n_rows() == 0 {
        return Err(Error::EmptyDataset);
    }
    if x.n_rows() != y.len() {
        return Err(Error::LengthMismatch {
            known: y.len(),
            predicted: x.n_rows(),
        });
    }
    for j in 0..x.n_cols() {
        if x.rows().any(|row| !row[j].is_finite()) {
            return Err(Error::NonFiniteValue(x.names()[j].clone()));
        }
    }
    if let Some(row) = y.iter().position(|v| !v.is_finite()) {
        return Err(Error::MissingTargetValue { row });
    }
    Ok(())
}
