use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use clientfolio_dataset::{DatasetLoader, SheetRef};

use crate::aggregation::{
    at_risk_holdings, compute_kpis, required_growth, sector_summary, select_client, top_holdings,
    GrowthTarget,
};
use crate::constants::TOP_HOLDINGS_LIMIT;
use crate::errors::Result;

use super::dashboard_model::DashboardData;

#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Distinct client names available for selection, in sheet order.
    async fn client_names(&self, source: &SheetRef) -> Result<Vec<String>>;

    /// Build the full dashboard view for one client.
    ///
    /// An unknown client yields an empty dashboard (zero totals, undefined
    /// means, empty tables), not an error.
    async fn dashboard(
        &self,
        source: &SheetRef,
        client_name: &str,
        growth_target: Option<GrowthTarget>,
    ) -> Result<DashboardData>;
}

/// One sequential computation pass per user interaction: load (cached) ->
/// select -> aggregate. Holds no state of its own beyond the loader.
pub struct DashboardService {
    loader: Arc<DatasetLoader>,
}

impl DashboardService {
    pub fn new(loader: Arc<DatasetLoader>) -> Self {
        Self { loader }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn client_names(&self, source: &SheetRef) -> Result<Vec<String>> {
        let table = self.loader.load(source).await?;
        Ok(table.client_names())
    }

    async fn dashboard(
        &self,
        source: &SheetRef,
        client_name: &str,
        growth_target: Option<GrowthTarget>,
    ) -> Result<DashboardData> {
        debug!("Building dashboard for client {}", client_name);
        let table = self.loader.load(source).await?;

        let holdings = select_client(table.records(), client_name);
        if holdings.is_empty() {
            warn!(
                "No holdings found for client {}. Returning an empty dashboard.",
                client_name
            );
        }

        let kpis = compute_kpis(&holdings);
        let required_annual_growth = growth_target
            .as_ref()
            .and_then(|target| required_growth(target, kpis.total_investment));
        let at_risk = at_risk_holdings(&holdings);
        let sectors = sector_summary(&holdings);
        let top = top_holdings(&holdings, TOP_HOLDINGS_LIMIT);

        debug!(
            "Dashboard for {} built: {} holdings, {} at risk, {} sectors",
            client_name,
            holdings.len(),
            at_risk.len(),
            sectors.len()
        );

        Ok(DashboardData {
            client_name: client_name.to_string(),
            as_of: table.loaded_at(),
            holdings,
            kpis,
            required_annual_growth,
            at_risk,
            sector_summary: sectors,
            top_holdings: top,
        })
    }
}
