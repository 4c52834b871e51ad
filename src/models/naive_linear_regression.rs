//! Implementation of a Naive Linear Regression model

use std::iter::FromIterator;

use super::{check_training_data, Predictor, Regressor};
use crate::dataset::FeatureMatrix;
use crate::error::Result;

/// A Naive Linear Regression model
///
/// This is univariate regression on a single feature. During training the best feature is selected.
/// The model is trained by consuming an iterator over the training data:
/// ```
/// # use listing_price_eval::models::NaiveLinearRegression;
/// # let data: Vec<(&[f64], &f64)> = vec![];
/// let model: NaiveLinearRegression = data
///     .into_iter()
///     .collect();
/// ```
/// If no feature explains any variance the model predicts the mean target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveLinearRegression {
    slope: f64,
    intercept: f64,
    feature: usize,
}

impl<'a, J> FromIterator<(J, &'a f64)> for NaiveLinearRegression
where
    J: IntoIterator<Item = &'a f64>,
{
    fn from_iter<I: IntoIterator<Item = (J, &'a f64)>>(iter: I) -> Self {
        let mut columns: Vec<Vec<f64>> = Vec::new();
        let mut targets = Vec::new();

        for (row, &y) in iter {
            targets.push(y);
            for (j, &x) in row.into_iter().enumerate() {
                if j == columns.len() {
                    columns.push(Vec::new());
                }
                columns[j].push(x);
            }
        }

        let y_mean = mean(&targets);
        let baseline = NaiveLinearRegression {
            slope: 0.0,
            intercept: y_mean,
            feature: 0,
        };
        let baseline_sse = targets.iter().map(|y| (y - y_mean).powi(2)).sum::<f64>();

        columns
            .iter()
            .enumerate()
            .filter_map(|(j, x)| fit_feature(j, x, &targets, y_mean))
            .fold((baseline, baseline_sse), |best, candidate| {
                if candidate.1 < best.1 {
                    candidate
                } else {
                    best
                }
            })
            .0
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// least squares line through one feature and its sum of squared residuals
fn fit_feature(
    feature: usize,
    x: &[f64],
    y: &[f64],
    y_mean: f64,
) -> Option<(NaiveLinearRegression, f64)> {
    let x_mean = mean(x);
    let (sxx, sxy) = x
        .iter()
        .zip(y)
        .fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
            let dx = xi - x_mean;
            (sxx + dx * dx, sxy + dx * (yi - y_mean))
        });

    if sxx == 0.0 {
        return None;
    }

    let model = NaiveLinearRegression {
        slope: sxy / sxx,
        intercept: y_mean - sxy / sxx * x_mean,
        feature,
    };
    let sse = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (model.intercept + model.slope * xi - yi).powi(2))
        .sum::<f64>();
    Some((model, sse))
}

impl NaiveLinearRegression {
    /// index of the feature the model regresses on
    pub fn feature(&self) -> usize {
        self.feature
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Predictor for NaiveLinearRegression {
    fn predict_one(&self, x: &[f64]) -> f64 {
        if self.slope == 0.0 {
            return self.intercept;
        }
        self.intercept + x[self.feature] * self.slope
    }
}

/// Fits a [`NaiveLinearRegression`] on a feature matrix
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveLinearRegressor;

impl Regressor for NaiveLinearRegressor {
    type Model = NaiveLinearRegression;

    fn fit(&self, x: &FeatureMatrix, y: &[f64]) -> Result<NaiveLinearRegression> {
        check_training_data(x, y)?;
        let model: NaiveLinearRegression = x.rows().zip(y).collect();
        if model.slope != 0.0 {
            debug!(
                "naive regression selected feature {}",
                x.names()[model.feature]
            );
        }
        Ok(model)
    }
}
