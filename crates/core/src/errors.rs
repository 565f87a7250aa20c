use thiserror::Error;

use clientfolio_dataset::DatasetError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset operation failed: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Input validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_errors_convert_to_root_error() {
        let dataset_error = DatasetError::MissingColumns {
            columns: vec!["Sector".to_string()],
        };
        let error: Error = dataset_error.into();
        assert!(matches!(error, Error::Dataset(_)));
        assert_eq!(
            format!("{}", error),
            "Dataset operation failed: The following required columns are missing from the dataset: Sector"
        );
    }
}
