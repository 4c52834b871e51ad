extern crate listing_price_eval;
extern crate simple_logger;

use listing_price_eval::prelude::*;
use listing_price_eval::{
    AnalysisConfig, LinearRegression, NaiveLinearRegression, NaiveLinearRegressor, Result, Session,
};

fn main() -> Result<()> {
    simple_logger::init().unwrap();

    let config = AnalysisConfig::from_json_file("demos/data/listings_config.json")?;
    let mut session = Session::from_config(&config)?;

    // every model sees the same seeded partition
    session.evaluate("Linear Regression", &LinearRegression::new())?;
    session.evaluate("Naive Linear Regression", &NaiveLinearRegressor)?;

    // models can also be given as a flow over the training and test rows
    session.run("Naive Linear Regression (flow)", |train, test| {
        let model: NaiveLinearRegression = train.collect();
        let y_out: Vec<_> = test.map(|x| model.predict_one(x)).collect();
        Box::new(y_out.into_iter())
    })?;

    println!("{}", session.performance());
    println!("{}", session.performance().to_json()?);
    Ok(())
}
