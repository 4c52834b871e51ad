//! One analysis session: prepare the listings once, then evaluate any number of models on the
//! same partition.

use crate::config::AnalysisConfig;
use crate::dataset::{DataSet, FeatureMatrix};
use crate::dates::encode_dates;
use crate::encoding::ColumnEncoders;
use crate::error::{Error, Result};
use crate::evaluation::{performance_eval, MetricBundle};
use crate::loading::read_csv;
use crate::models::{Predictor, Regressor};
use crate::performance::PerformanceTable;
use crate::split::{split_seeded, Partition};

/// Prepared data and accumulated results of one analysis
#[derive(Debug)]
pub struct Session {
    encoders: ColumnEncoders,
    partition: Partition,
    performance: PerformanceTable,
}

impl Session {
    /// Load `config.source` and prepare it.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let data = read_csv(&config.source)?;
        Session::prepare(config, data)
    }

    /// Encode categorical and date columns, move the target to the end and split.
    pub fn prepare(config: &AnalysisConfig, mut data: DataSet) -> Result<Self> {
        let preview = config.preview_rows;
        info!("source data:\n{}", data.head(preview));

        let categorical = AnalysisConfig::present(&config.categorical, data.column_names());
        let encoders = ColumnEncoders::fit_transform(&mut data, &categorical[..])?;
        info!("{} categorical columns encoded:\n{}", encoders.len(), data.head(preview));

        let dates = AnalysisConfig::present(&config.dates, data.column_names());
        for column in dates {
            encode_dates(&mut data, column)?;
        }

        data.with_target_last(&config.target)?;
        info!("target {} moved to the end:\n{}", config.target, data.head(preview));

        let partition = split_seeded(&data, config.train_fraction, config.seed)?;
        info!(
            "split into {} training and {} test rows",
            partition.n_train(),
            partition.n_test()
        );
        debug!("training features:\n{}", partition.x_train.head(preview));
        debug!("test features:\n{}", partition.x_test.head(preview));

        Ok(Session {
            encoders,
            partition,
            performance: PerformanceTable::new(),
        })
    }

    pub fn encoders(&self) -> &ColumnEncoders {
        &self.encoders
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn performance(&self) -> &PerformanceTable {
        &self.performance
    }

    pub fn into_performance(self) -> PerformanceTable {
        self.performance
    }

    /// Fit `regressor` on the training rows, evaluate it on the test rows and record the result
    /// under `name`.
    pub fn evaluate<R: Regressor>(&mut self, name: &str, regressor: &R) -> Result<MetricBundle> {
        self.ensure_new(name)?;
        let (x_train, x_test) = self.matrices()?;

        info!("fitting {}", name);
        let model = regressor.fit(&x_train, &self.partition.y_train)?;
        let y_pred = model.predict(&x_test);

        self.finish(name, &y_pred)
    }

    /// Run a model given as a closure that receives the training rows and the test features, and
    /// returns one prediction per test row. The result is recorded under `name`.
    pub fn run<F>(&mut self, name: &str, flow: F) -> Result<MetricBundle>
    where
        F: for<'a> Fn(
            &mut dyn Iterator<Item = (&'a [f64], &'a f64)>,
            &mut dyn Iterator<Item = &'a [f64]>,
        ) -> Box<dyn Iterator<Item = f64>>,
    {
        self.ensure_new(name)?;
        let (x_train, x_test) = self.matrices()?;

        let y_pred: Vec<f64> = {
            let mut train = x_train.rows().zip(self.partition.y_train.iter());
            let mut test = x_test.rows();
            flow(&mut train, &mut test).collect()
        };

        self.finish(name, &y_pred)
    }

    fn ensure_new(&self, name: &str) -> Result<()> {
        match self.performance.get(name) {
            Some(_) => Err(Error::DuplicateModelName(name.to_owned())),
            None => Ok(()),
        }
    }

    fn matrices(&self) -> Result<(FeatureMatrix, FeatureMatrix)> {
        Ok((
            self.partition.x_train.to_matrix()?,
            self.partition.x_test.to_matrix()?,
        ))
    }

    fn finish(&mut self, name: &str, y_pred: &[f64]) -> Result<MetricBundle> {
        let bundle = performance_eval(&self.partition.y_test, y_pred)?;
        info!(
            "{}: RMSE {} / Root MSLE {} / R2 {} ({}%)",
            name, bundle.rmse, bundle.rmsle, bundle.r2, bundle.r2_percent
        );
        self.performance.record(name, bundle)?;
        Ok(bundle)
    }
}
