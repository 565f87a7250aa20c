//! Required-column contract for holdings worksheets.
//!
//! Column matching is case- and string-exact. A table missing any required
//! column is rejected before row parsing with a [`DatasetError::MissingColumns`]
//! that lists exactly the absent names.

use crate::errors::DatasetError;

/// Column names every holdings worksheet must carry, by exact name.
///
/// `Gain/Loss` must be present but its values are ignored: gain/loss is
/// always recomputed from the amount columns.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Client ID",
    "Client Name",
    "Product Name",
    "Investment Amount",
    "Market Value",
    "Gain/Loss",
    "Sector",
    "Risk Level",
    "Annualized Expected Growth",
    "Actual Annual Growth",
];

/// Resolved positions of the required columns within a fetched table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnIndex {
    pub client_id: usize,
    pub client_name: usize,
    pub product_name: usize,
    pub investment_amount: usize,
    pub market_value: usize,
    pub sector: usize,
    pub risk_level: usize,
    pub annualized_expected_growth: usize,
    pub actual_annual_growth: usize,
}

impl ColumnIndex {
    /// Check the required-column contract and resolve column positions.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::MissingColumns`] naming every absent column,
    /// in required-column order.
    pub fn resolve(columns: &[String]) -> Result<Self, DatasetError> {
        let find = |name: &str| columns.iter().position(|header| header == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| find(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns { columns: missing });
        }

        // All lookups below are guaranteed by the check above.
        let position = |name: &str| find(name).unwrap_or_default();
        Ok(Self {
            client_id: position("Client ID"),
            client_name: position("Client Name"),
            product_name: position("Product Name"),
            investment_amount: position("Investment Amount"),
            market_value: position("Market Value"),
            sector: position("Sector"),
            risk_level: position("Risk Level"),
            annualized_expected_growth: position("Annualized Expected Growth"),
            actual_annual_growth: position("Actual Annual Growth"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_columns() -> Vec<String> {
        REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_resolves_complete_header() {
        let index = ColumnIndex::resolve(&all_columns()).unwrap();
        assert_eq!(index.client_id, 0);
        assert_eq!(index.actual_annual_growth, 9);
    }

    #[test]
    fn test_resolves_regardless_of_column_order() {
        let mut columns = all_columns();
        columns.reverse();
        let index = ColumnIndex::resolve(&columns).unwrap();
        assert_eq!(index.client_id, 9);
        assert_eq!(index.market_value, 5);
    }

    #[test]
    fn test_extra_columns_are_allowed() {
        let mut columns = all_columns();
        columns.push("Advisor".to_string());
        assert!(ColumnIndex::resolve(&columns).is_ok());
    }

    #[test]
    fn test_removing_any_column_reports_exactly_that_column() {
        for (position, removed) in REQUIRED_COLUMNS.iter().enumerate() {
            let mut columns = all_columns();
            columns.remove(position);
            let error = ColumnIndex::resolve(&columns).unwrap_err();
            match error {
                DatasetError::MissingColumns { columns } => {
                    assert_eq!(columns, vec![removed.to_string()]);
                }
                other => panic!("expected MissingColumns, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_multiple_missing_columns_in_required_order() {
        let columns = vec!["Client ID".to_string(), "Sector".to_string()];
        let error = ColumnIndex::resolve(&columns).unwrap_err();
        match error {
            DatasetError::MissingColumns { columns } => {
                assert_eq!(
                    columns,
                    vec![
                        "Client Name",
                        "Product Name",
                        "Investment Amount",
                        "Market Value",
                        "Gain/Loss",
                        "Risk Level",
                        "Annualized Expected Growth",
                        "Actual Annual Growth",
                    ]
                );
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_column_match_is_case_exact() {
        let mut columns = all_columns();
        columns[1] = "client name".to_string();
        let error = ColumnIndex::resolve(&columns).unwrap_err();
        assert!(matches!(error, DatasetError::MissingColumns { columns } if columns == vec!["Client Name"]));
    }
}
