use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clientfolio_dataset::HoldingRecord;

use crate::utils::format_utils::{format_currency, format_optional_percent};

/// Summary scalars for one client's holdings.
///
/// The totals are exact decimal sums. The two growth means are `None` for
/// an empty subset; NaN never appears here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSet {
    pub total_investment: Decimal,
    pub total_market_value: Decimal,
    pub net_gain_loss: Decimal,
    /// Mean expected growth across the subset, percent per year
    pub target_annual_growth: Option<f64>,
    /// Mean realized growth across the subset, percent per year
    pub actual_annual_growth: Option<f64>,
}

impl KpiSet {
    /// The KPI set of an empty subset: zero totals, undefined means.
    pub fn empty() -> Self {
        Self {
            total_investment: Decimal::ZERO,
            total_market_value: Decimal::ZERO,
            net_gain_loss: Decimal::ZERO,
            target_annual_growth: None,
            actual_annual_growth: None,
        }
    }

    /// Display-ready values: currency-prefixed totals, percent-suffixed
    /// growth rates, a placeholder where a mean is undefined.
    pub fn display(&self) -> KpiDisplay {
        KpiDisplay {
            total_investment: format_currency(self.total_investment),
            total_market_value: format_currency(self.total_market_value),
            net_gain_loss: format_currency(self.net_gain_loss),
            target_annual_growth: format_optional_percent(self.target_annual_growth),
            actual_annual_growth: format_optional_percent(self.actual_annual_growth),
        }
    }
}

/// String-formatted KPI values for the presentation boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiDisplay {
    pub total_investment: String,
    pub total_market_value: String,
    pub net_gain_loss: String,
    pub target_annual_growth: String,
    pub actual_annual_growth: String,
}

/// An underperforming position: current value below invested amount.
///
/// Carries the columns of the at-risk table the dashboard shows, with
/// `gain_loss` freshly derived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskHolding {
    pub client_id: String,
    pub client_name: String,
    pub product_name: String,
    pub investment_amount: Decimal,
    pub market_value: Decimal,
    pub gain_loss: Decimal,
    pub sector: String,
    pub risk_level: String,
}

impl AtRiskHolding {
    pub(crate) fn from_record(record: &HoldingRecord) -> Self {
        Self {
            client_id: record.client_id.clone(),
            client_name: record.client_name.clone(),
            product_name: record.product_name.clone(),
            investment_amount: record.investment_amount,
            market_value: record.market_value,
            gain_loss: record.gain_loss(),
            sector: record.sector.clone(),
            risk_level: record.risk_level.clone(),
        }
    }
}

/// Invested amount and current value aggregated over one sector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorPerformance {
    pub sector: String,
    pub total_invested: Decimal,
    pub total_market_value: Decimal,
    pub net_gain_loss: Decimal,
}

impl SectorPerformance {
    pub fn new(sector: &str) -> Self {
        Self {
            sector: sector.to_string(),
            total_invested: Decimal::ZERO,
            total_market_value: Decimal::ZERO,
            net_gain_loss: Decimal::ZERO,
        }
    }

    pub fn add(&mut self, record: &HoldingRecord) {
        self.total_invested += record.investment_amount;
        self.total_market_value += record.market_value;
        self.net_gain_loss = self.total_market_value - self.total_invested;
    }
}

/// One product's aggregate invested amount, for the top-holdings summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHolding {
    pub product_name: String,
    pub total_invested: Decimal,
}

/// Operator-specified return target: a desired absolute gain over a time
/// horizon, back-solved into a required annual growth rate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthTarget {
    /// Desired absolute gain
    pub target_increase: Decimal,
    /// Horizon in years
    pub years: u32,
}

impl GrowthTarget {
    pub fn new(target_increase: Decimal, years: u32) -> Self {
        Self {
            target_increase,
            years,
        }
    }
}
