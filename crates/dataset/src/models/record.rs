use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the holdings table: a single client position in a product.
///
/// A client appears on many rows, one per holding. Amounts are decimal;
/// the growth columns are percentages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    /// Opaque client identifier, not unique across rows
    pub client_id: String,
    /// Client display name, used as the selection key
    pub client_name: String,
    pub product_name: String,
    /// Principal invested in the position
    pub investment_amount: Decimal,
    /// Current value of the position
    pub market_value: Decimal,
    /// Sector classification label
    pub sector: String,
    /// Risk label from the source; carried through, never interpreted
    pub risk_level: String,
    /// Expected growth, percent per year
    pub annualized_expected_growth: f64,
    /// Realized growth, percent per year
    pub actual_annual_growth: f64,
}

impl HoldingRecord {
    /// Current gain or loss on the position.
    ///
    /// Always derived from the live amounts. The source sheet carries a
    /// Gain/Loss column but its values can be stale, so it is never read.
    pub fn gain_loss(&self) -> Decimal {
        self.market_value - self.investment_amount
    }

    /// A position is at risk when it is worth less than was put in.
    pub fn is_at_risk(&self) -> bool {
        self.market_value < self.investment_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_record(investment: Decimal, market_value: Decimal) -> HoldingRecord {
        HoldingRecord {
            client_id: "C001".to_string(),
            client_name: "Avery Chen".to_string(),
            product_name: "Global Equity Fund".to_string(),
            investment_amount: investment,
            market_value,
            sector: "Technology".to_string(),
            risk_level: "Medium".to_string(),
            annualized_expected_growth: 7.5,
            actual_annual_growth: 6.1,
        }
    }

    #[test]
    fn test_gain_loss_is_derived_from_amounts() {
        let record = create_test_record(dec!(100), dec!(120));
        assert_eq!(record.gain_loss(), dec!(20));

        let record = create_test_record(dec!(200), dec!(150));
        assert_eq!(record.gain_loss(), dec!(-50));
    }

    #[test]
    fn test_at_risk_when_market_value_below_investment() {
        assert!(create_test_record(dec!(100), dec!(90)).is_at_risk());
        assert!(!create_test_record(dec!(50), dec!(60)).is_at_risk());
        // Break-even is not at risk
        assert!(!create_test_record(dec!(100), dec!(100)).is_at_risk());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let record = create_test_record(dec!(100), dec!(120));
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("clientName").is_some());
        assert!(json.get("investmentAmount").is_some());
        assert!(json.get("annualizedExpectedGrowth").is_some());
    }
}
