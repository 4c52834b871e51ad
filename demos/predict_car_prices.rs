extern crate listing_price_eval;
#[macro_use]
extern crate log;
extern crate simple_logger;

use std::env;

use listing_price_eval::prelude::*;
use listing_price_eval::{AnalysisConfig, LinearRegression, Result, Session};

fn main() -> Result<()> {
    simple_logger::init().unwrap();

    // usage: predict_car_prices [config.json]
    let config = match env::args().nth(1) {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::from_json_file("demos/data/listings_config.json")?,
    };

    let mut session = Session::from_config(&config)?;

    // fit once more to look at the coefficients
    let partition = session.partition();
    let x_train = partition.x_train.to_matrix()?;
    let model = LinearRegression::new().fit(&x_train, &partition.y_train)?;
    for (name, w) in x_train.names().iter().zip(&model.coefficients) {
        info!("coefficient {}: {}", name, w);
    }

    let results = session.evaluate("Linear Regression", &LinearRegression::new())?;
    println!("MSE : {}", results.mse);
    println!("Root MSE : {}", results.rmse);
    println!("MSLE : {}", results.msle);
    println!("Root MSLE : {}", results.rmsle);
    println!("R2 Score : {} or {}%", results.r2, results.r2_percent);

    println!();
    println!("{}", session.performance());
    Ok(())
}
