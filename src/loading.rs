//! Reading data sets from CSV files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::dataset::{Column, DataSet};
use crate::error::Result;

/// Load a CSV file with a header row.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataSet> {
    let path = path.as_ref();
    info!("Loading {}", path.display());
    let data = from_reader(File::open(path)?)?;
    info!("Loaded {} rows and {} columns", data.n_rows(), data.n_cols());
    Ok(data)
}

/// Parse CSV text with a header row.
///
/// A column is numeric if each of its non-empty cells parses as a number; empty cells of numeric
/// columns become NaN. All other columns are categorical.
pub fn from_reader<R: Read>(reader: R) -> Result<DataSet> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_owned()).collect();
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for record in rdr.records() {
        let record = record?;
        for (col, value) in cells.iter_mut().zip(record.iter()) {
            col.push(value.to_owned());
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| infer_column(name, values))
        .collect();

    DataSet::new(columns)
}

fn infer_column(name: String, values: Vec<String>) -> Column {
    let numeric = values.iter().any(|v| !v.is_empty())
        && values
            .iter()
            .all(|v| v.is_empty() || v.parse::<f64>().is_ok());

    if !numeric {
        debug!("column {} is categorical", name);
        return Column::categorical(name, values);
    }

    let parsed = values
        .iter()
        .map(|v| v.parse::<f64>().unwrap_or(::std::f64::NAN))
        .collect();
    Column::numeric(name, parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ColumnData;
    use crate::error::Error;

    const LISTINGS: &str = "\
Title,Price,Make,Year,Odo,Added
2008 ford focus,5000,ford,2008,120000,2018-03-14 09:26:53
2012 honda civic, 7200 ,honda,2012,,2018-03-15 18:00:00
";

    #[test]
    fn column_types() {
        let ds = from_reader(LISTINGS.as_bytes()).unwrap();

        assert_eq!(ds.n_rows(), 2);
        let names: Vec<_> = ds.column_names().collect();
        assert_eq!(names, vec!["Title", "Price", "Make", "Year", "Odo", "Added"]);

        assert_eq!(
            ds.column("Price").unwrap().data,
            ColumnData::Numeric(vec![5000.0, 7200.0])
        );
        assert!(!ds.column("Make").unwrap().data.is_numeric());
        assert!(!ds.column("Added").unwrap().data.is_numeric());
    }

    #[test]
    fn empty_numeric_cells_are_nan() {
        let ds = from_reader(LISTINGS.as_bytes()).unwrap();
        match ds.column("Odo").unwrap().data {
            ColumnData::Numeric(ref v) => {
                assert_eq!(v[0], 120000.0);
                assert!(v[1].is_nan());
            }
            ref other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_column_is_categorical() {
        let ds = from_reader("a,b\n1,\n2,\n".as_bytes()).unwrap();
        assert!(ds.column("a").unwrap().data.is_numeric());
        assert_eq!(
            ds.column("b").unwrap().data,
            ColumnData::Categorical(vec![String::new(), String::new()])
        );
    }

    #[test]
    fn ragged_rows_fail() {
        match from_reader("a,b\n1,2\n3\n".as_bytes()) {
            Err(Error::CsvError(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_file() {
        match read_csv("/nonexistent/listings.csv") {
            Err(Error::IoError(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
