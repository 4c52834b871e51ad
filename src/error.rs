use std::error::Error as StdError;
use std::fmt;
use std::io::Error as IoError;
use std::result::Result as StdResult;

use csv::Error as CsvError;
use serde_json::Error as JsonError;
use smartcore::error::Failed;

pub type Result<T> = StdResult<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// split fraction outside of [0, 1]
    InvalidFraction(f64),
    EmptyDataset,
    MissingTargetColumn,
    /// true and predicted sequences of different length
    LengthMismatch { known: usize, predicted: usize },
    /// a value <= -1 was passed to a logarithmic error measure
    NonPositiveValueForLogMetric(f64),
    NoPredictions,
    DuplicateModelName(String),

    UnknownColumn(String),
    NonNumericColumn(String),
    /// NaN or infinite feature value in the named column
    NonFiniteValue(String),
    MissingTargetValue { row: usize },
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
    UnknownLabel { column: String, label: String },
    DateParse { column: String, value: String },

    IoError(IoError),
    CsvError(CsvError),
    JsonError(JsonError),
    /// the least squares solver gave up
    FitError(Failed),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidFraction(n) => write!(f, "split fraction {} is not in [0, 1]", n),
            Error::EmptyDataset => write!(f, "dataset has no rows"),
            Error::MissingTargetColumn => write!(f, "no target column designated"),
            Error::LengthMismatch { known, predicted } => write!(
                f,
                "{} known values but {} predictions",
                known, predicted
            ),
            Error::NonPositiveValueForLogMetric(v) => write!(
                f,
                "logarithmic error is undefined for value {} (must be > -1)",
                v
            ),
            Error::NoPredictions => write!(f, "no predictions to evaluate"),
            Error::DuplicateModelName(ref name) => {
                write!(f, "model '{}' is already recorded", name)
            }
            Error::UnknownColumn(ref name) => write!(f, "no column named '{}'", name),
            Error::NonNumericColumn(ref name) => write!(f, "column '{}' is not numeric", name),
            Error::NonFiniteValue(ref name) => {
                write!(f, "column '{}' contains NaN or infinite values", name)
            }
            Error::MissingTargetValue { row } => write!(f, "target value missing in row {}", row),
            Error::ColumnLength {
                ref column,
                expected,
                found,
            } => write!(
                f,
                "column '{}' has {} rows, expected {}",
                column, found, expected
            ),
            Error::UnknownLabel {
                ref column,
                ref label,
            } => write!(f, "label '{}' was not seen in column '{}'", label, column),
            Error::DateParse {
                ref column,
                ref value,
            } => write!(f, "cannot parse '{}' in column '{}' as a date", value, column),
            Error::IoError(ref e) => write!(f, "io error: {}", e),
            Error::CsvError(ref e) => write!(f, "csv error: {}", e),
            Error::JsonError(ref e) => write!(f, "json error: {}", e),
            Error::FitError(ref e) => write!(f, "fitting failed: {}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::IoError(ref e) => Some(e),
            Error::CsvError(ref e) => Some(e),
            Error::JsonError(ref e) => Some(e),
            Error::FitError(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::IoError(e)
    }
}

impl From<CsvError> for Error {
    fn from(e: CsvError) -> Self {
        Error::CsvError(e)
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Self {
        Error::JsonError(e)
    }
}

impl From<Failed> for Error {
    fn from(e: Failed) -> Self {
        Error::FitError(e)
    }
}
