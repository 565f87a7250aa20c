//! Google Sheets holdings provider.
//!
//! Reads one worksheet through the public CSV export endpoint. The sheet
//! must be link-readable; no credentials are sent. The worksheet is
//! addressed by its `gid` (the tab identifier in the sheet's URL).

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::DatasetError;
use crate::models::{RawTable, SheetRef};
use crate::provider::HoldingsProvider;

const BASE_URL: &str = "https://docs.google.com/spreadsheets/d";
const PROVIDER_ID: &str = "GOOGLE_SHEETS";

/// Google Sheets CSV-export provider.
pub struct GoogleSheetsProvider {
    client: Client,
}

impl GoogleSheetsProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for GoogleSheetsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HoldingsProvider for GoogleSheetsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch(&self, source: &SheetRef) -> Result<RawTable, DatasetError> {
        let spreadsheet_id = source.spreadsheet_id()?;
        let url = format!("{}/{}/export", BASE_URL, spreadsheet_id);
        debug!(
            "Fetching worksheet {} of spreadsheet {} as CSV",
            source.worksheet, spreadsheet_id
        );

        let response = self
            .client
            .get(&url)
            .query(&[("format", "csv"), ("gid", source.worksheet.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        // The export endpoint answers requests for unknown sheets with an
        // HTML error page instead of an HTTP error.
        if body.trim_start().starts_with('<') {
            return Err(DatasetError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: format!("export returned HTML for worksheet {}", source.worksheet),
            });
        }

        RawTable::from_csv_reader(body.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        assert_eq!(GoogleSheetsProvider::new().id(), PROVIDER_ID);
    }

    #[tokio::test]
    async fn test_invalid_sheet_ref_fails_before_any_request() {
        let provider = GoogleSheetsProvider::new();
        let source = SheetRef::new("https://example.com/not-a-sheet", "0");
        let error = provider.fetch(&source).await.unwrap_err();
        assert!(matches!(error, DatasetError::InvalidSheetRef(_)));
    }
}
