//! Ordinary least squares regression

use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{
    LinearRegression as LeastSquares, LinearRegressionParameters, LinearRegressionSolverName,
};

use super::{check_training_data, Predictor, Regressor};
use crate::dataset::FeatureMatrix;
use crate::error::Result;

type FittedLeastSquares = LeastSquares<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Ordinary least squares with an intercept.
///
/// Features are centered and scaled to unit variance and the least squares problem is solved by
/// smartcore's SVD solver, which yields the minimum norm solution when columns are collinear.
/// Constant columns are left out of the fit and get a coefficient of zero.
///
/// ```
/// # use listing_price_eval::dataset::{Column, DataSet};
/// # use listing_price_eval::models::{LinearRegression, Predictor, Regressor};
/// let x = DataSet::new(vec![Column::numeric("Year", vec![2000.0, 2005.0, 2010.0])])
///     .unwrap()
///     .to_matrix()
///     .unwrap();
/// let model = LinearRegression::new().fit(&x, &[1000.0, 3500.0, 6000.0]).unwrap();
/// assert!((model.predict_one(&[2008.0]) - 5000.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRegression;

impl LinearRegression {
    pub fn new() -> Self {
        LinearRegression
    }
}

/// A fitted linear model `y = intercept + coefficients · x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl Predictor for LinearModel {
    fn predict_one(&self, x: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(x)
                .map(|(w, xi)| w * xi)
                .sum::<f64>()
    }
}

impl Regressor for LinearRegression {
    type Model = LinearModel;

    fn fit(&self, x: &FeatureMatrix, y: &[f64]) -> Result<LinearModel> {
        check_training_data(x, y)?;

        let n = x.n_rows() as f64;
        let p = x.n_cols();
        let y_mean = y.iter().sum::<f64>() / n;

        let mut x_mean = vec![0.0; p];
        for row in x.rows() {
            for (m, xi) in x_mean.iter_mut().zip(row) {
                *m += xi;
            }
        }
        for m in &mut x_mean {
            *m /= n;
        }

        let mut x_scale = vec![0.0; p];
        for row in x.rows() {
            for j in 0..p {
                let d = row[j] - x_mean[j];
                x_scale[j] += d * d;
            }
        }
        for s in &mut x_scale {
            *s = (*s / n).sqrt();
        }

        let varying: Vec<usize> = (0..p).filter(|&j| x_scale[j] > 0.0).collect();
        let mut coefficients = vec![0.0; p];

        if varying.is_empty() {
            debug!("no varying features, predicting the mean of {} rows", x.n_rows());
            return Ok(LinearModel {
                intercept: y_mean,
                coefficients,
            });
        }

        let standardized: Vec<Vec<f64>> = x
            .rows()
            .map(|row| {
                varying
                    .iter()
                    .map(|&j| (row[j] - x_mean[j]) / x_scale[j])
                    .collect()
            })
            .collect();
        let z = DenseMatrix::from_2d_vec(&standardized)?;

        let mut params = LinearRegressionParameters::default();
        params.solver = LinearRegressionSolverName::SVD;
        let fitted: FittedLeastSquares = LeastSquares::fit(&z, &y.to_vec(), params)?;

        // read the fitted plane back at the origin and along each unit vector
        let k = varying.len();
        let mut basis = vec![vec![0.0; k]; k + 1];
        for i in 0..k {
            basis[i + 1][i] = 1.0;
        }
        let at = fitted.predict(&DenseMatrix::from_2d_vec(&basis)?)?;

        for (i, &j) in varying.iter().enumerate() {
            coefficients[j] = (at[i + 1] - at[0]) / x_scale[j];
        }
        let intercept = at[0]
            - coefficients
                .iter()
                .zip(&x_mean)
                .map(|(w, m)| w * m)
                .sum::<f64>();

        debug!(
            "fitted linear model on {} rows x {} features ({} constant)",
            x.n_rows(),
            p,
            p - k
        );

        Ok(LinearModel {
            intercept,
            coefficients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Column, DataSet};
    use crate::error::Error;

    fn matrix(columns: Vec<(&str, Vec<f64>)>) -> FeatureMatrix {
        DataSet::new(
            columns
                .into_iter()
                .map(|(name, v)| Column::numeric(name, v))
                .collect(),
        )
        .unwrap()
        .to_matrix()
        .unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6 * (1.0 + b.abs())
    }

    #[test]
    fn recovers_exact_plane() {
        let x1 = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let x2 = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        let y: Vec<f64> = x1
            .iter()
            .zip(&x2)
            .map(|(a, b)| 3.0 + 2.0 * a - b)
            .collect();

        let model = LinearRegression::new()
            .fit(&matrix(vec![("x1", x1), ("x2", x2)]), &y)
            .unwrap();

        assert!(close(model.intercept, 3.0));
        assert!(close(model.coefficients[0], 2.0));
        assert!(close(model.coefficients[1], -1.0));
    }

    #[test]
    fn large_magnitude_features() {
        // ordinal dates and odometer readings next to small codes
        let added = vec![736767.0, 736768.0, 736790.0, 736801.0, 736830.0];
        let odo = vec![120000.0, 45000.0, 98000.0, 150000.0, 30000.0];
        let make = vec![0.0, 1.0, 2.0, 0.0, 1.0];
        let y: Vec<f64> = (0..5)
            .map(|i| 20000.0 - 0.05 * odo[i] + 10.0 * (added[i] - 736767.0) + 300.0 * make[i])
            .collect();

        let x = matrix(vec![("Added", added), ("Odo", odo), ("Make", make)]);
        let model = LinearRegression::new().fit(&x, &y).unwrap();

        for (pred, known) in model.predict(&x).iter().zip(&y) {
            assert!(close(*pred, *known));
        }
    }

    #[test]
    fn collinear_and_constant_columns() {
        let x1 = vec![1.0, 2.0, 3.0, 4.0];
        let x2: Vec<f64> = x1.iter().map(|v| 2.0 * v).collect();
        let c = vec![7.0; 4];
        let y: Vec<f64> = x1.iter().map(|v| 1.0 + 4.0 * v).collect();

        let x = matrix(vec![("x1", x1), ("x2", x2), ("c", c)]);
        let model = LinearRegression::new().fit(&x, &y).unwrap();

        assert_eq!(model.coefficients[2], 0.0);
        for (pred, known) in model.predict(&x).iter().zip(&y) {
            assert!(close(*pred, *known));
        }
    }

    #[test]
    fn residuals_are_orthogonal_to_features() {
        let odo = vec![120.0, 45.0, 98.0, 150.0, 30.0, 77.0, 61.0];
        let year = vec![2008.0, 2015.0, 2011.0, 2006.0, 2017.0, 2012.0, 2010.0];
        let y = vec![5200.0, 14100.0, 8800.0, 3900.0, 16500.0, 9300.0, 8100.0];

        let x = matrix(vec![("Odo", odo.clone()), ("Year", year.clone())]);
        let model = LinearRegression::new().fit(&x, &y).unwrap();
        let residuals: Vec<f64> = model
            .predict(&x)
            .iter()
            .zip(&y)
            .map(|(p, k)| k - p)
            .collect();

        assert!(residuals.iter().any(|r| r.abs() > 1.0));
        assert!(residuals.iter().sum::<f64>().abs() < 1e-6);
        for feature in &[odo, year] {
            let dot: f64 = feature.iter().zip(&residuals).map(|(a, r)| a * r).sum();
            assert!(dot.abs() < 1e-3);
        }
    }

    #[test]
    fn no_features_predicts_mean() {
        let mut ds = DataSet::new(vec![Column::numeric("Price", vec![1.0, 2.0, 6.0])]).unwrap();
        ds.set_target("Price").unwrap();
        let (features, _) = ds.clone_split().unwrap();
        let x = features.to_matrix().unwrap();

        let model = LinearRegression::new().fit(&x, &[1.0, 2.0, 6.0]).unwrap();
        assert_eq!(model.predict(&x), vec![3.0, 3.0, 3.0]);
    }

    #[test]
    fn rejects_bad_input() {
        let x = matrix(vec![("Odo", vec![1.0, ::std::f64::NAN])]);
        match LinearRegression::new().fit(&x, &[1.0, 2.0]) {
            Err(Error::NonFiniteValue(name)) => assert_eq!(name, "Odo"),
            other => panic!("unexpected {:?}", other),
        }

        let x = matrix(vec![("Odo", vec![1.0, 2.0])]);
        match LinearRegression::new().fit(&x, &[1.0]) {
            Err(Error::LengthMismatch { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }

        let x = matrix(vec![("Odo", vec![])]);
        match LinearRegression::new().fit(&x, &[]) {
            Err(Error::EmptyDataset) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
