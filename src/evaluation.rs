//! Regression quality of a set of predictions, summarized as a fixed bundle of measures.

use crate::error::{Error, Result};
use crate::measure_accumulator::{
    MeanSquaredError, MeanSquaredLogError, MeasureAccumulator, R2Score,
};

/// Row labels of a metric bundle, in the order of [`MetricBundle::values`].
pub static METRIC_NAMES: [&str; 6] = [
    "MSE",
    "Root MSE",
    "MSLE",
    "Root MSLE",
    "R2 Score",
    "Accuracy(%)",
];

/// The six measures reported for every model run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricBundle {
    pub mse: f64,
    pub rmse: f64,
    pub msle: f64,
    pub rmsle: f64,
    pub r2: f64,
    /// R² as a percentage, rounded to 4 decimal places
    pub r2_percent: f64,
}

impl MetricBundle {
    /// values in fixed order: MSE, RMSE, MSLE, RMSLE, R², R²%
    pub fn values(&self) -> [f64; 6] {
        [
            self.mse,
            self.rmse,
            self.msle,
            self.rmsle,
            self.r2,
            self.r2_percent,
        ]
    }

    pub fn labeled(&self) -> impl Iterator<Item = (&'static str, f64)> {
        METRIC_NAMES.iter().cloned().zip(self.values().to_vec())
    }
}

/// Compute the metric bundle for known and predicted target values.
///
/// Inputs are validated before any measure is computed: both sequences must have the same,
/// non-zero length and every value must be greater than -1, where the logarithmic measures are
/// defined.
///
/// ```
/// # use listing_price_eval::evaluation::performance_eval;
/// let bundle = performance_eval(&[3.0, 5.0, 2.0, 7.0], &[3.0, 5.0, 2.0, 7.0]).unwrap();
/// assert_eq!(bundle.mse, 0.0);
/// assert_eq!(bundle.r2_percent, 100.0);
/// ```
pub fn performance_eval(known: &[f64], predicted: &[f64]) -> Result<MetricBundle> {
    if known.len() != predicted.len() {
        return Err(Error::LengthMismatch {
            known: known.len(),
            predicted: predicted.len(),
        });
    }
    if known.is_empty() {
        return Err(Error::NoPredictions);
    }
    check_log_domain(known)?;
    check_log_domain(predicted)?;

    let mut mse = MeanSquaredError::new();
    let mut msle = MeanSquaredLogError::new();
    let mut r2 = R2Score::new();
    for (k, p) in known.iter().zip(predicted) {
        mse.update_one(k, p);
        msle.update_one(k, p);
        r2.update_one(k, p);
    }

    let mse = mse.result();
    let msle = msle.result();
    let r2 = r2.result();

    Ok(MetricBundle {
        mse,
        rmse: mse.sqrt(),
        msle,
        rmsle: msle.sqrt(),
        r2,
        r2_percent: round_to(r2 * 100.0, 4),
    })
}

fn check_log_domain(values: &[f64]) -> Result<()> {
    match values.iter().find(|&&v| !(v > -1.0)) {
        Some(&v) => Err(Error::NonPositiveValueForLogMetric(v)),
        None => Ok(()),
    }
}

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value, so `59.68535` (stored slightly below the half way point)
/// becomes `59.6853`.
pub fn round_to(x: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, x).parse().unwrap_or(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_prediction() {
        let y = [3.0, 5.0, 2.0, 7.0];
        let b = performance_eval(&y, &y).unwrap();

        assert_eq!(b.mse, 0.0);
        assert_eq!(b.rmse, 0.0);
        assert_eq!(b.msle, 0.0);
        assert_eq!(b.rmsle, 0.0);
        assert_eq!(b.r2, 1.0);
        assert_eq!(b.r2_percent, 100.0);
    }

    #[test]
    fn roots_and_percentage() {
        let known = [12000.0, 4500.0, 8999.0, 23000.0, 650.0];
        let pred = [11250.5, 5020.0, 9400.0, 19875.25, 1200.0];
        let b = performance_eval(&known, &pred).unwrap();

        assert_eq!(b.rmse, b.mse.sqrt());
        assert_eq!(b.rmsle, b.msle.sqrt());
        assert_eq!(b.r2_percent, round_to(b.r2 * 100.0, 4));
        assert!(b.r2 < 1.0 && b.r2 > 0.9);
    }

    #[test]
    fn log_domain_is_checked() {
        match performance_eval(&[1.0, 2.0, 3.0], &[-2.0, 2.0, 3.0]) {
            Err(Error::NonPositiveValueForLogMetric(v)) => assert_eq!(v, -2.0),
            other => panic!("unexpected {:?}", other),
        }
        match performance_eval(&[-1.0, 2.0], &[1.0, 2.0]) {
            Err(Error::NonPositiveValueForLogMetric(v)) => assert_eq!(v, -1.0),
            other => panic!("unexpected {:?}", other),
        }
        match performance_eval(&[::std::f64::NAN], &[1.0]) {
            Err(Error::NonPositiveValueForLogMetric(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(performance_eval(&[-0.5, 2.0], &[0.0, 2.0]).is_ok());
    }

    #[test]
    fn length_mismatch() {
        match performance_eval(&[1.0, 2.0, 3.0], &[1.0, 2.0]) {
            Err(Error::LengthMismatch {
                known: 3,
                predicted: 2,
            }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty() {
        match performance_eval(&[], &[]) {
            Err(Error::NoPredictions) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(94.860813704, 4), 94.8608);
        assert_eq!(round_to(-12.346, 2), -12.35);
        assert_eq!(round_to(59.68535, 4), 59.6853);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn labels_follow_values() {
        let y = [1.0, 2.0];
        let b = performance_eval(&y, &y).unwrap();
        let labeled: Vec<_> = b.labeled().collect();

        assert_eq!(labeled.len(), 6);
        assert_eq!(labeled[0], ("MSE", 0.0));
        assert_eq!(labeled[5], ("Accuracy(%)", 100.0));
    }
}
