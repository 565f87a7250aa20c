//! Per-client aggregation over a loaded holdings table.
//!
//! - `aggregation_model` - the derived shapes a dashboard renders (KPIs,
//!   at-risk rows, sector performance, top holdings)
//! - `aggregation_engine` - the pure operations that produce them

mod aggregation_engine;
mod aggregation_model;

pub use aggregation_engine::{
    at_risk_holdings, compute_kpis, required_growth, sector_summary, select_client, top_holdings,
};
pub use aggregation_model::{
    AtRiskHolding, GrowthTarget, KpiDisplay, KpiSet, SectorPerformance, TopHolding,
};
