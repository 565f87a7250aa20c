use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clientfolio_dataset::HoldingRecord;

use crate::aggregation::{AtRiskHolding, KpiSet, SectorPerformance, TopHolding};

/// Everything the presentation layer needs to render one client's
/// dashboard: the client subset, summary KPIs, the optional back-solved
/// growth rate, and the three derived tables.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub client_name: String,
    /// When the underlying table was fetched from the source
    pub as_of: DateTime<Utc>,
    /// The client's rows, in source order
    pub holdings: Vec<HoldingRecord>,
    pub kpis: KpiSet,
    /// Annual growth, percent, required to meet the operator's target;
    /// absent when no target was given or its preconditions failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_annual_growth: Option<f64>,
    pub at_risk: Vec<AtRiskHolding>,
    pub sector_summary: Vec<SectorPerformance>,
    pub top_holdings: Vec<TopHolding>,
}

impl DashboardData {
    /// True when the selection matched no rows.
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
