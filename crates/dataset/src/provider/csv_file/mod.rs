//! Local CSV file holdings provider.
//!
//! Reads a worksheet export from disk. Useful for offline operation and
//! fixtures; the `spreadsheet` field of the [`SheetRef`] is the file path
//! and the `worksheet` field is ignored.

use std::fs::File;

use async_trait::async_trait;
use log::debug;

use crate::errors::DatasetError;
use crate::models::{RawTable, SheetRef};
use crate::provider::HoldingsProvider;

const PROVIDER_ID: &str = "CSV_FILE";

/// File-backed provider for CSV worksheet exports.
#[derive(Default)]
pub struct CsvFileProvider;

impl CsvFileProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HoldingsProvider for CsvFileProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch(&self, source: &SheetRef) -> Result<RawTable, DatasetError> {
        debug!("Reading holdings CSV from {}", source.spreadsheet);
        let file = File::open(&source.spreadsheet)?;
        RawTable::from_csv_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Name,Amount").unwrap();
        writeln!(file, "Alpha,100").unwrap();

        let provider = CsvFileProvider::new();
        let source = SheetRef::new(file.path().to_string_lossy(), "");
        let table = provider.fetch(&source).await.unwrap();

        assert_eq!(table.columns, vec!["Name", "Amount"]);
        assert_eq!(table.rows, vec![vec!["Alpha", "100"]]);
    }

    #[tokio::test]
    async fn test_missing_file_surfaces_io_error() {
        let provider = CsvFileProvider::new();
        let source = SheetRef::new("/definitely/not/here.csv", "");
        let error = provider.fetch(&source).await.unwrap_err();
        assert!(matches!(error, DatasetError::Io(_)));
    }
}
