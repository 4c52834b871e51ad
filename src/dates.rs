//! Date columns as day ordinals.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::dataset::{ColumnData, DataSet};
use crate::error::{Error, Result};

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Proleptic Gregorian ordinal of a date, where 0001-01-01 is day 1. The time of day is dropped.
///
/// ```
/// # use listing_price_eval::dates::to_ordinal;
/// assert_eq!(to_ordinal("0001-01-01"), Some(1));
/// assert_eq!(to_ordinal("2018-03-14 09:26:53"), Some(736767));
/// ```
pub fn to_ordinal(text: &str) -> Option<i64> {
    parse_date(text.trim()).map(|d| i64::from(d.num_days_from_ce()))
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local().date());
    }
    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
            return Some(d);
        }
    }
    None
}

/// Replace a date column by its day ordinals. Numeric columns are assumed to be converted already.
pub fn encode_dates(data: &mut DataSet, column: &str) -> Result<()> {
    let ordinals = match data.column(column) {
        None => return Err(Error::UnknownColumn(column.to_owned())),
        Some(c) => match c.data {
            ColumnData::Numeric(_) => {
                warn!("date column {} is already numeric", column);
                return Ok(());
            }
            ColumnData::Categorical(ref values) => values
                .iter()
                .map(|v| {
                    to_ordinal(v).map(|d| d as f64).ok_or_else(|| Error::DateParse {
                        column: column.to_owned(),
                        value: v.clone(),
                    })
                })
                .collect::<Result<Vec<f64>>>()?,
        },
    };

    data.replace_column(column, ColumnData::Numeric(ordinals))
}
