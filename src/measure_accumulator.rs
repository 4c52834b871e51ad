//! Measure accumulators are summaries of model performance, such as regression error or explained
//! variance.

use std::marker::PhantomData;
use num_traits::AsPrimitive;

/// Trait implemented by performance measures
pub trait MeasureAccumulator<T> {
    /// initialize new measure
    fn new() -> Self;

    /// update with one prediction
    fn update_one(&mut self, known: &T, pred: &T);

    /// get resulting performance
    fn result(&self) -> f64;

    /// update with multiple predictions
    fn update<I: Iterator<Item = T>>(&mut self, known: I, predicted: I) {
        for (k, p) in known.zip(predicted) {
            self.update_one(&k, &p)
        }
    }
}

/// Mean Squared Error
#[derive(Debug)]
pub struct MeanSquaredError<T> {
    sum_of_squares: f64,
    n: usize,
    _t: PhantomData<T>,
}

impl<T> MeasureAccumulator<T> for MeanSquaredError<T>
where
    T: AsPrimitive<f64>,
{
    fn new() -> Self {
        MeanSquaredError {
            sum_of_squares: 0.0,
            n: 0,
            _t: PhantomData,
        }
    }

    fn update_one(&mut self, known: &T, pred: &T) {
        let diff = known.as_() - pred.as_();
        self.sum_of_squares += diff * diff;
        self.n += 1;
    }

    fn result(&self) -> f64 {
        self.sum_of_squares / self.n as f64
    }
}

/// Root Mean Squared Error
#[derive(Debug)]
pub struct RootMeanSquaredError<T> {
    mse: MeanSquaredError<T>,
}

impl<T> MeasureAccumulator<T> for RootMeanSquaredError<T>
where
    T: AsPrimitive<f64>,
{
    fn new() -> Self {
        RootMeanSquaredError {
            mse: MeanSquaredError::new(),
        }
    }

    fn update_one(&mut self, known: &T, pred: &T) {
        self.mse.update_one(known, pred)
    }

    fn result(&self) -> f64 {
        self.mse.result().sqrt()
    }
}

/// Mean Squared Logarithmic Error, `mean((ln(1 + known) - ln(1 + pred))^2)`
///
/// Only defined for values greater than -1; callers must validate their inputs first. Out of
/// domain values yield NaN.
#[derive(Debug)]
pub struct MeanSquaredLogError<T> {
    sum_of_squares: f64,
    n: usize,
    _t: PhantomData<T>,
}

impl<T> MeasureAccumulator<T> for MeanSquaredLogError<T>
where
    T: AsPrimitive<f64>,
{
    fn new() -> Self {
        MeanSquaredLogError {
            sum_of_squares: 0.0,
            n: 0,
            _t: PhantomData,
        }
    }

    fn update_one(&mut self, known: &T, pred: &T) {
        let diff = known.as_().ln_1p() - pred.as_().ln_1p();
        self.sum_of_squares += diff * diff;
        self.n += 1;
    }

    fn result(&self) -> f64 {
        self.sum_of_squares / self.n as f64
    }
}

/// Root Mean Squared Logarithmic Error
#[derive(Debug)]
pub struct RootMeanSquaredLogError<T> {
    msle: MeanSquaredLogError<T>,
}

impl<T> MeasureAccumulator<T> for RootMeanSquaredLogError<T>
where
    T: AsPrimitive<f64>,
{
    fn new() -> Self {
        RootMeanSquaredLogError {
            msle: MeanSquaredLogError::new(),
        }
    }

    fn update_one(&mut self, known: &T, pred: &T) {
        self.msle.update_one(known, pred)
    }

    fn result(&self) -> f64 {
        self.msle.result().sqrt()
    }
}

/// Coefficient of determination, `1 - SS_res / SS_tot`
///
/// The total sum of squares is accumulated with Welford's update so no second pass over the known
/// values is needed. A constant known sequence scores 1.0 if predicted exactly and 0.0 otherwise.
#[derive(Debug)]
pub struct R2Score<T> {
    mean: f64,
    ss_tot: f64,
    ss_res: f64,
    n: usize,
    _t: PhantomData<T>,
}

impl<T> MeasureAccumulator<T> for R2Score<T>
where
    T: AsPrimitive<f64>,
{
    fn new() -> Self {
        R2Score {
            mean: 0.0,
            ss_tot: 0.0,
            ss_res: 0.0,
            n: 0,
            _t: PhantomData,
        }
    }

    fn update_one(&mut self, known: &T, pred: &T) {
        let k = known.as_();
        let r = k - pred.as_();
        self.ss_res += r * r;

        self.n += 1;
        let delta = k - self.mean;
        self.mean += delta / self.n as f64;
        self.ss_tot += delta * (k - self.mean);
    }

    fn result(&self) -> f64 {
        if self.ss_tot == 0.0 {
            if self.ss_res == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - self.ss_res / self.ss_tot
        }
    }
}

#[test]
fn mse_and_rmse() {
    let known = vec![3.0, -0.5, 2.0, 7.0];
    let pred = vec![2.5, 0.0, 2.0, 8.0];

    let mut mse = MeanSquaredError::new();
    mse.update(known.iter().cloned(), pred.iter().cloned());
    assert_eq!(mse.result(), 0.375);

    let mut rmse = RootMeanSquaredError::new();
    rmse.update(known.into_iter(), pred.into_iter());
    assert_eq!(rmse.result(), 0.375f64.sqrt());
}

#[test]
fn integer_targets() {
    let mut msle: MeanSquaredLogError<i32> = MeanSquaredLogError::new();
    msle.update(vec![0, 3].into_iter(), vec![0, 3].into_iter());
    assert_eq!(msle.result(), 0.0);

    let mut mse: MeanSquaredError<u8> = MeanSquaredError::new();
    mse.update(vec![1, 4].into_iter(), vec![3, 4].into_iter());
    assert_eq!(mse.result(), 2.0);
}

#[test]
fn msle_known_value() {
    // ln(1 + e - 1) - ln(1 + 0) == 1
    let mut msle = MeanSquaredLogError::new();
    msle.update_one(&1.0f64.exp_m1(), &0.0);
    msle.update_one(&2.0, &2.0);
    assert!((msle.result() - 0.5).abs() < 1e-12);

    let mut rmsle = RootMeanSquaredLogError::new();
    rmsle.update_one(&1.0f64.exp_m1(), &0.0);
    assert!((rmsle.result() - 1.0).abs() < 1e-12);
}

#[test]
fn r2() {
    let known = vec![3.0, -0.5, 2.0, 7.0];
    let pred = vec![2.5, 0.0, 2.0, 8.0];

    let mut r2 = R2Score::new();
    r2.update(known.into_iter(), pred.into_iter());
    assert!((r2.result() - 0.9486081370449679).abs() < 1e-12);
}

#[test]
fn r2_constant_known() {
    let mut exact = R2Score::new();
    exact.update(vec![2.0, 2.0].into_iter(), vec![2.0, 2.0].into_iter());
    assert_eq!(exact.result(), 1.0);

    let mut off = R2Score::new();
    off.update(vec![2.0, 2.0].into_iter(), vec![2.0, 3.0].into_iter());
    assert_eq!(off.result(), 0.0);
}
