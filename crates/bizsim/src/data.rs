//! Sales dataset loading
//!
//! Expected columns:
//! `date,region,product_category,revenue,costs,profit,units_sold,customer_satisfaction`
//!
//! `profit` and `customer_satisfaction` may be left empty. A missing profit is
//! filled in as revenue - costs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use bizsim_core::model::{Dataset, Observation};
use serde::Deserialize;

/// Error types for loading datasets and configuration
#[derive(Debug)]
pub enum LoadError {
    Io(String),
    Csv(String),
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "IO error: {}", msg),
            LoadError::Csv(msg) => write!(f, "CSV error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

/// One CSV row as written on disk
#[derive(Debug, Deserialize)]
struct SalesRow {
    date: jiff::civil::Date,
    region: String,
    product_category: String,
    revenue: f64,
    costs: f64,
    #[serde(default)]
    profit: Option<f64>,
    units_sold: f64,
    #[serde(default)]
    customer_satisfaction: Option<f64>,
}

impl From<SalesRow> for Observation {
    fn from(row: SalesRow) -> Self {
        Observation {
            date: row.date,
            profit: row.profit.unwrap_or(row.revenue - row.costs),
            region: row.region,
            product_category: row.product_category,
            revenue: row.revenue,
            costs: row.costs,
            units_sold: row.units_sold,
            customer_satisfaction: row.customer_satisfaction.unwrap_or_default(),
        }
    }
}

/// Parse sales rows from any reader.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut observations = Vec::new();
    for (i, row) in reader.deserialize::<SalesRow>().enumerate() {
        // Header is line 1
        let row = row.map_err(|e| LoadError::Csv(format!("line {}: {}", i + 2, e)))?;
        observations.push(Observation::from(row));
    }

    Ok(Dataset::new(observations))
}

/// Load a sales CSV from disk.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path)
        .map_err(|e| LoadError::Io(format!("Failed to open '{}': {}", path.display(), e)))?;

    let dataset = read_dataset(file)?;
    if dataset.is_empty() {
        tracing::warn!(path = %path.display(), "dataset has no rows");
    } else {
        tracing::info!(
            path = %path.display(),
            observations = dataset.len(),
            "dataset loaded"
        );
    }
    Ok(dataset)
}
