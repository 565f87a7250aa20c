use std::collections::HashSet;
use std::io::Read;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::HoldingRecord;
use crate::errors::DatasetError;

/// Decoded but untyped worksheet payload: ordered column names plus rows of
/// cell strings. Produced by providers, consumed by the loader.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Decode a CSV payload with a header row.
    ///
    /// Header names are trimmed; cell values are kept verbatim. Rows with
    /// a different cell count than the header are kept as-is and resolved
    /// during parsing.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = csv_reader
            .headers()?
            .iter()
            .map(|header| header.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(Self { columns, rows })
    }
}

/// A fully loaded holdings table.
///
/// Ordered rows, immutable after load, shared as `Arc<HoldingsTable>` so
/// cache consumers read the same bytes a fresh load would have produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsTable {
    source: String,
    loaded_at: DateTime<Utc>,
    records: Vec<HoldingRecord>,
}

impl HoldingsTable {
    pub fn new(source: impl Into<String>, records: Vec<HoldingRecord>) -> Self {
        Self {
            source: source.into(),
            loaded_at: Utc::now(),
            records,
        }
    }

    /// Identity of the source this table was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// When the table was fetched from the source.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// All rows, in source order.
    pub fn records(&self) -> &[HoldingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct client names in first-seen row order, for the selection
    /// control.
    pub fn client_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|record| seen.insert(record.client_name.as_str()))
            .map(|record| record.client_name.clone())
            .collect()
    }
}
