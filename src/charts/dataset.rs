use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// One dataset cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Text(String),
}

impl DataValue {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Category key for this cell; numbers use their shortest display form.
    #[must_use]
    pub fn to_key(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Read access to named tabular datasets.
///
/// Charts only use it at construction time, to derive extents and labels.
pub trait DatasetProvider {
    fn column_names(&self, dataset_id: &str) -> ChartResult<Vec<String>>;
    fn rows(&self, dataset_id: &str) -> ChartResult<Vec<Vec<DataValue>>>;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<DataValue>>,
}

/// Insertion-ordered in-memory dataset store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryDatasets {
    datasets: IndexMap<String, Dataset>,
}

impl InMemoryDatasets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dataset_id: impl Into<String>, dataset: Dataset) {
        self.datasets.insert(dataset_id.into(), dataset);
    }

    pub fn dataset_ids(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    /// Parses `{ "<id>": { "columns": [...], "rows": [[...], ...] }, ... }`.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Dataset(format!("failed to parse datasets json: {e}")))
    }

    fn get(&self, dataset_id: &str) -> ChartResult<&Dataset> {
        self.datasets
            .get(dataset_id)
            .ok_or_else(|| ChartError::Dataset(format!("unknown dataset `{dataset_id}`")))
    }
}

impl DatasetProvider for InMemoryDatasets {
    fn column_names(&self, dataset_id: &str) -> ChartResult<Vec<String>> {
        Ok(self.get(dataset_id)?.columns.clone())
    }

    fn rows(&self, dataset_id: &str) -> ChartResult<Vec<Vec<DataValue>>> {
        Ok(self.get(dataset_id)?.rows.clone())
    }
}

pub(crate) fn column_name<P: DatasetProvider + ?Sized>(
    provider: &P,
    dataset_id: &str,
    index: usize,
) -> ChartResult<String> {
    let columns = provider.column_names(dataset_id)?;
    columns.get(index).cloned().ok_or_else(|| {
        ChartError::Dataset(format!(
            "dataset `{dataset_id}` has {} columns, column {index} requested",
            columns.len()
        ))
    })
}

/// Numeric cells of one column; non-numeric and missing cells are skipped.
pub(crate) fn numeric_column<P: DatasetProvider + ?Sized>(
    provider: &P,
    dataset_id: &str,
    index: usize,
) -> ChartResult<Vec<f64>> {
    let rows = provider.rows(dataset_id)?;
    let mut skipped = 0_usize;
    let values: Vec<f64> = rows
        .iter()
        .filter_map(|row| {
            let value = row.get(index).and_then(DataValue::as_f64);
            if value.is_none() {
                skipped += 1;
            }
            value
        })
        .collect();

    if skipped > 0 {
        warn!(dataset_id, column = index, skipped, "skipped non-numeric cells");
    }
    Ok(values)
}
