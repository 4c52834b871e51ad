//! Side by side comparison of the metric bundles of several models.

use std::fmt;

use crate::error::{Error, Result};
use crate::evaluation::{MetricBundle, METRIC_NAMES};

/// One recorded model run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub model: String,
    pub metrics: MetricBundle,
}

/// Metric bundles keyed by model name, kept in the order they were recorded.
///
/// Columns are append-only: recording a name twice is an error rather than an overwrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTable {
    columns: Vec<ModelPerformance>,
}

impl PerformanceTable {
    pub fn new() -> Self {
        PerformanceTable {
            columns: Vec::new(),
        }
    }

    /// Append the results of `model_name` as a new column.
    pub fn record<S: Into<String>>(&mut self, model_name: S, bundle: MetricBundle) -> Result<()> {
        let model = model_name.into();
        if self.get(&model).is_some() {
            return Err(Error::DuplicateModelName(model));
        }
        info!("recording performance of {}", model);
        self.columns.push(ModelPerformance {
            model,
            metrics: bundle,
        });
        Ok(())
    }

    /// all columns in insertion order
    pub fn as_table(&self) -> &[ModelPerformance] {
        &self.columns
    }

    pub fn get(&self, model_name: &str) -> Option<&MetricBundle> {
        self.columns
            .iter()
            .find(|c| c.model == model_name)
            .map(|c| &c.metrics)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.columns)?)
    }
}

impl fmt::Display for PerformanceTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label_width = METRIC_NAMES.iter().map(|s| s.len()).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.model.len().max(12))
            .collect();

        write!(f, "{:w$}", "", w = label_width)?;
        for (c, &w) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", c.model, w = w)?;
        }

        for (row, label) in METRIC_NAMES.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:w$}", label, w = label_width)?;
            for (c, &w) in self.columns.iter().zip(&widths) {
                write!(f, "  {:>w$.4}", c.metrics.values()[row], w = w)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::performance_eval;

    fn bundle(offset: f64) -> MetricBundle {
        performance_eval(&[1.0, 2.0, 3.0, 4.0], &[1.0 + offset, 2.0, 3.0, 4.0 - offset]).unwrap()
    }

    #[test]
    fn insertion_order() {
        let mut table = PerformanceTable::new();
        table.record("Linear Regression", bundle(0.5)).unwrap();
        table.record("Naive Linear Regression", bundle(1.0)).unwrap();
        table.record("Baseline", bundle(0.0)).unwrap();

        let names: Vec<_> = table.as_table().iter().map(|c| c.model.as_str()).collect();
        assert_eq!(
            names,
            vec!["Linear Regression", "Naive Linear Regression", "Baseline"]
        );
        assert_eq!(table.get("Baseline"), Some(&bundle(0.0)));
    }

    #[test]
    fn duplicate_name() {
        let mut table = PerformanceTable::new();
        table.record("LinearRegression", bundle(0.5)).unwrap();

        match table.record("LinearRegression", bundle(0.0)) {
            Err(Error::DuplicateModelName(name)) => assert_eq!(name, "LinearRegression"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("LinearRegression"), Some(&bundle(0.5)));
    }

    #[test]
    fn display_has_a_row_per_metric() {
        let mut table = PerformanceTable::new();
        table.record("LR", bundle(0.5)).unwrap();

        let text = format!("{}", table);
        assert_eq!(text.lines().count(), 1 + METRIC_NAMES.len());
        assert!(text.lines().last().unwrap().starts_with("Accuracy(%)"));
    }

    #[test]
    fn json_export() {
        let mut table = PerformanceTable::new();
        table.record("LR", bundle(0.0)).unwrap();

        let json = table.to_json().unwrap();
        let parsed: Vec<ModelPerformance> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table.as_table());
    }
}
