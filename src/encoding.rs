//! Label encoding of categorical columns into dense integer codes.
//!
//! Every column gets its own encoder, so equal labels in different columns never share a code
//! table.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::dataset::{ColumnData, DataSet};
use crate::error::{Error, Result};

/// Maps the distinct labels of one column to `0..n_classes`, in sorted label order.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEncoder {
    column: String,
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    /// fit on string labels; codes follow lexicographic order
    pub fn fit<S: AsRef<str>>(column: &str, labels: &[S]) -> Self {
        let mut classes: Vec<String> = labels.iter().map(|s| s.as_ref().to_owned()).collect();
        classes.sort();
        classes.dedup();
        LabelEncoder::from_classes(column, classes)
    }

    /// fit on numeric labels; codes follow numeric order
    pub fn fit_numeric(column: &str, values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or_else(|| nan_last(a, b)));
        sorted.dedup_by(|a, b| a == b || (a.is_nan() && b.is_nan()));
        LabelEncoder::from_classes(column, sorted.iter().map(numeric_label).collect())
    }

    fn from_classes(column: &str, classes: Vec<String>) -> Self {
        let index = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        LabelEncoder {
            column: column.to_owned(),
            classes,
            index,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// labels in code order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn code(&self, label: &str) -> Option<usize> {
        self.index.get(label).cloned()
    }

    pub fn transform<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<f64>> {
        labels.iter().map(|l| self.code_or_err(l.as_ref())).collect()
    }

    pub fn transform_numeric(&self, values: &[f64]) -> Result<Vec<f64>> {
        values
            .iter()
            .map(|v| self.code_or_err(&numeric_label(v)))
            .collect()
    }

    pub fn inverse(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(|s| s.as_str())
    }

    fn code_or_err(&self, label: &str) -> Result<f64> {
        self.code(label)
            .map(|c| c as f64)
            .ok_or_else(|| Error::UnknownLabel {
                column: self.column.clone(),
                label: label.to_owned(),
            })
    }
}

fn numeric_label(v: &f64) -> String {
    // -0.0 and 0.0 are one class
    format!("{}", if *v == 0.0 { 0.0 } else { *v })
}

fn nan_last(a: &f64, b: &f64) -> Ordering {
    a.is_nan().cmp(&b.is_nan())
}

/// Independent label encoders, keyed by column name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnEncoders {
    encoders: BTreeMap<String, LabelEncoder>,
}

impl ColumnEncoders {
    /// Fit one encoder per named column and replace the column's values with their codes.
    pub fn fit_transform<S: AsRef<str>>(data: &mut DataSet, columns: &[S]) -> Result<Self> {
        let mut encoders = BTreeMap::new();

        for name in columns {
            let name = name.as_ref();
            let column = data
                .column(name)
                .ok_or_else(|| Error::UnknownColumn(name.to_owned()))?;

            let (encoder, codes) = match column.data {
                ColumnData::Categorical(ref labels) => {
                    let enc = LabelEncoder::fit(name, &labels[..]);
                    let codes = enc.transform(&labels[..])?;
                    (enc, codes)
                }
                ColumnData::Numeric(ref values) => {
                    let enc = LabelEncoder::fit_numeric(name, values);
                    let codes = enc.transform_numeric(values)?;
                    (enc, codes)
                }
            };

            debug!("encoded {} into {} classes", name, encoder.n_classes());
            data.replace_column(name, ColumnData::Numeric(codes))?;
            encoders.insert(name.to_owned(), encoder);
        }

        Ok(ColumnEncoders { encoders })
    }

    pub fn get(&self, column: &str) -> Option<&LabelEncoder> {
        self.encoders.get(column)
    }

    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }
}
