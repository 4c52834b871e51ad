//! Analysis settings

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::split::DEFAULT_SEED;

/// Settings of one analysis session, usually loaded from a JSON file.
///
/// Every field has a default, so a config file only needs to list what differs:
/// ```
/// # use listing_price_eval::config::AnalysisConfig;
/// let config = AnalysisConfig::from_json_str(r#"{ "train_fraction": 0.75 }"#).unwrap();
/// assert_eq!(config.train_fraction, 0.75);
/// assert_eq!(config.target, "Price");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// CSV file with one listing per row
    pub source: PathBuf,
    /// column to predict
    pub target: String,
    /// columns to label encode
    pub categorical: Vec<String>,
    /// columns holding dates, converted to day ordinals
    pub dates: Vec<String>,
    /// fraction of rows used for training
    pub train_fraction: f64,
    pub seed: u64,
    /// number of rows logged when previewing intermediate data
    pub preview_rows: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            source: PathBuf::from("output.csv"),
            target: "Price".to_owned(),
            categorical: [
                "Title",
                "Make",
                "Model",
                "MakeKey",
                "ModelKey",
                "URL",
                "TitleKey",
                "Area",
                "conditionAttr",
                "cylinders",
                "drive",
                "fuel",
                "paint_color",
                "size",
                "title_status",
                "transmission",
                "type",
                "Body",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            dates: vec!["Added".to_owned()],
            train_fraction: 0.9,
            seed: DEFAULT_SEED,
            preview_rows: 5,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// keep only the listed columns that exist in `columns`
    pub(crate) fn present<'a, I>(wanted: &'a [String], columns: I) -> Vec<&'a str>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let available: Vec<String> = columns.into_iter().map(|c| c.as_ref().to_owned()).collect();
        wanted
            .iter()
            .filter(|w| {
                let found = available.iter().any(|a| a == *w);
                if !found {
                    warn!("configured column {} is not in the data set", w);
                }
                found
            })
            .map(|w| w.as_str())
            .collect()
    }
}
