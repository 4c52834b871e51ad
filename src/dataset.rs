//! In-memory tabular data: ordered, named, row-aligned columns.

use std::fmt;

use crate::error::{Error, Result};

/// Values of a single column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match *self {
            ColumnData::Numeric(ref v) => v.len(),
            ColumnData::Categorical(ref v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        match *self {
            ColumnData::Numeric(_) => true,
            ColumnData::Categorical(_) => false,
        }
    }

    fn take(&self, rows: &[usize]) -> ColumnData {
        match *self {
            ColumnData::Numeric(ref v) => ColumnData::Numeric(rows.iter().map(|&i| v[i]).collect()),
            ColumnData::Categorical(ref v) => {
                ColumnData::Categorical(rows.iter().map(|&i| v[i].clone()).collect())
            }
        }
    }

    fn cell(&self, row: usize) -> String {
        match *self {
            ColumnData::Numeric(ref v) => format!("{}", v[row]),
            ColumnData::Categorical(ref v) => v[row].clone(),
        }
    }
}

/// A named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn numeric<S: Into<String>>(name: S, values: Vec<f64>) -> Self {
        Column {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    pub fn categorical<S: Into<String>>(name: S, values: Vec<String>) -> Self {
        Column {
            name: name.into(),
            data: ColumnData::Categorical(values),
        }
    }
}

/// An arbitrary data set, optionally with a designated target column
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    columns: Vec<Column>,
    n_rows: usize,
    target: Option<String>,
}

impl DataSet {
    /// Build a data set from columns. All columns must have the same number of rows.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map_or(0, |c| c.data.len());
        for col in &columns {
            if col.data.len() != n_rows {
                return Err(Error::ColumnLength {
                    column: col.name.clone(),
                    expected: n_rows,
                    found: col.data.len(),
                });
            }
        }
        Ok(DataSet {
            columns,
            n_rows,
            target: None,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| Error::UnknownColumn(name.to_owned()))
    }

    /// name of the designated target column, if any
    pub fn target(&self) -> Option<&str> {
        self.target.as_ref().map(|s| s.as_str())
    }

    pub fn set_target(&mut self, name: &str) -> Result<()> {
        self.position(name)?;
        self.target = Some(name.to_owned());
        Ok(())
    }

    /// Move a column behind all others, keeping the relative order of the rest.
    pub fn move_to_end(&mut self, name: &str) -> Result<()> {
        let i = self.position(name)?;
        let col = self.columns.remove(i);
        self.columns.push(col);
        Ok(())
    }

    /// Designate `name` as target and make it the final column.
    pub fn with_target_last(&mut self, name: &str) -> Result<()> {
        self.move_to_end(name)?;
        self.set_target(name)
    }

    /// Replace the values of an existing column. The row count must not change.
    pub fn replace_column(&mut self, name: &str, data: ColumnData) -> Result<()> {
        let i = self.position(name)?;
        if data.len() != self.n_rows {
            return Err(Error::ColumnLength {
                column: name.to_owned(),
                expected: self.n_rows,
                found: data.len(),
            });
        }
        self.columns[i].data = data;
        Ok(())
    }

    /// new data set containing the given rows, in the given order
    pub fn take_rows(&self, rows: &[usize]) -> DataSet {
        DataSet {
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    data: c.data.take(rows),
                })
                .collect(),
            n_rows: rows.len(),
            target: self.target.clone(),
        }
    }

    /// first `n` rows
    pub fn head(&self, n: usize) -> DataSet {
        let rows: Vec<_> = (0..n.min(self.n_rows)).collect();
        self.take_rows(&rows)
    }

    /// return two data sets; one containing the features and the other containing the target
    /// variable.
    pub fn clone_split(&self) -> Option<(DataSet, Column)> {
        let target = self.target.as_ref()?;
        let i = self.columns.iter().position(|c| &c.name == target)?;

        let mut features = self.columns.clone();
        let target_col = features.remove(i);

        Some((
            DataSet {
                columns: features,
                n_rows: self.n_rows,
                target: None,
            },
            target_col,
        ))
    }

    /// Convert to a row-major numeric matrix. Fails on categorical columns.
    pub fn to_matrix(&self) -> Result<FeatureMatrix> {
        let n_cols = self.columns.len();
        let mut data = vec![0.0; self.n_rows * n_cols];

        for (j, col) in self.columns.iter().enumerate() {
            match col.data {
                ColumnData::Numeric(ref v) => {
                    for (i, &x) in v.iter().enumerate() {
                        data[i * n_cols + j] = x;
                    }
                }
                ColumnData::Categorical(_) => {
                    return Err(Error::NonNumericColumn(col.name.clone()))
                }
            }
        }

        Ok(FeatureMatrix {
            names: self.columns.iter().map(|c| c.name.clone()).collect(),
            data,
            n_rows: self.n_rows,
            n_cols,
        })
    }
}

impl fmt::Display for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<_> = self.column_names().collect();
        writeln!(f, "{}", names.join("\t"))?;
        for i in 0..self.n_rows {
            let cells: Vec<_> = self.columns.iter().map(|c| c.data.cell(i)).collect();
            writeln!(f, "{}", cells.join("\t"))?;
        }
        write!(f, "[{} rows x {} columns]", self.n_rows, self.n_cols())
    }
}

/// Dense row-major feature matrix
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    names: Vec<String>,
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl FeatureMatrix {
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    pub fn rows<'a>(&'a self) -> impl Iterator<Item = &'a [f64]> + 'a {
        (0..self.n_rows).map(move |i| self.row(i))
    }
}
