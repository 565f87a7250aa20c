use thiserror::Error;

/// Errors that can occur while loading the holdings dataset.
///
/// Fetch and decode failures are fatal and surfaced to the caller as-is;
/// the loader performs no retries.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// One or more required columns are absent from the fetched table.
    /// Listed in required-column order; the pipeline halts before any
    /// aggregation runs.
    #[error("The following required columns are missing from the dataset: {}", columns.join(", "))]
    MissingColumns {
        /// Exact names of the missing columns
        columns: Vec<String>,
    },

    /// The sheet reference could not be resolved to a spreadsheet id.
    #[error("Invalid sheet reference: {0}")]
    InvalidSheetRef(String),

    /// A provider-specific failure that is not a transport error.
    #[error("Provider error: {provider} - {message}")]
    Provider {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while fetching from the source.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The fetched payload could not be decoded as CSV.
    #[error("CSV decode error: {0}")]
    Csv(#[from] csv::Error),

    /// A local file source could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DatasetError {
    /// True when the error is a schema violation rather than a fetch
    /// failure. Schema violations are user-actionable (fix the sheet).
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::MissingColumns { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_display_lists_exact_names() {
        let error = DatasetError::MissingColumns {
            columns: vec!["Sector".to_string(), "Risk Level".to_string()],
        };
        assert_eq!(
            format!("{}", error),
            "The following required columns are missing from the dataset: Sector, Risk Level"
        );
    }

    #[test]
    fn test_missing_columns_is_schema_error() {
        let error = DatasetError::MissingColumns {
            columns: vec!["Sector".to_string()],
        };
        assert!(error.is_schema_error());

        let error = DatasetError::InvalidSheetRef("nonsense".to_string());
        assert!(!error.is_schema_error());
    }

    #[test]
    fn test_provider_error_display() {
        let error = DatasetError::Provider {
            provider: "GOOGLE_SHEETS".to_string(),
            message: "export returned HTML".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: GOOGLE_SHEETS - export returned HTML"
        );
    }
}
