//! Train/test partitioning and regression evaluation for vehicle listing price models.
//!
//! A [`Session`] loads listings, label encodes categorical columns, turns dates into day
//! ordinals, and splits the rows into a reproducible training and test partition. Any number of
//! models can then be fitted on that partition; each run is summarized by a [`MetricBundle`]
//! and collected in a [`PerformanceTable`] for side by side comparison.
//!
//! ```no_run
//! # use listing_price_eval::prelude::*;
//! # use listing_price_eval::{AnalysisConfig, LinearRegression, Session};
//! let config = AnalysisConfig::default();
//! let mut session = Session::from_config(&config).unwrap();
//! session.evaluate("Linear Regression", &LinearRegression::new()).unwrap();
//! println!("{}", session.performance());
//! ```

extern crate chrono;
extern crate csv;
#[macro_use]
extern crate log;
extern crate num_traits;
extern crate rand;
extern crate rand_chacha;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate smartcore;

pub mod config;
pub mod dataset;
pub mod dates;
pub mod encoding;
pub mod error;
pub mod evaluation;
pub mod loading;
pub mod measure_accumulator;
pub mod models;
pub mod performance;
pub mod procedures;
pub mod session;
pub mod split;

pub use crate::config::AnalysisConfig;
pub use crate::dataset::{Column, ColumnData, DataSet, FeatureMatrix};
pub use crate::error::{Error, Result};
pub use crate::evaluation::{performance_eval, MetricBundle};
pub use crate::measure_accumulator::{
    MeanSquaredError, MeanSquaredLogError, R2Score, RootMeanSquaredError,
    RootMeanSquaredLogError,
};
pub use crate::models::{LinearRegression, NaiveLinearRegression, NaiveLinearRegressor};
pub use crate::performance::PerformanceTable;
pub use crate::session::Session;
pub use crate::split::{split, split_seeded, Partition};

pub mod prelude {
    pub use crate::measure_accumulator::MeasureAccumulator;
    pub use crate::models::{Predictor, Regressor};
}
