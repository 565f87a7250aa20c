//! Pure aggregation over client holdings.
//!
//! Every operation here is a function of its inputs: no I/O, no state, no
//! side effects. A dashboard pass re-runs the relevant operations for the
//! current (table, client, growth target) selection. All of them are
//! well-defined on an empty subset.

use std::collections::HashMap;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use clientfolio_dataset::HoldingRecord;

use super::aggregation_model::{
    AtRiskHolding, GrowthTarget, KpiSet, SectorPerformance, TopHolding,
};

/// Rows belonging to `client_name`, in original table order.
///
/// Exact string equality; an unknown name yields an empty subset, not an
/// error.
pub fn select_client(records: &[HoldingRecord], client_name: &str) -> Vec<HoldingRecord> {
    records
        .iter()
        .filter(|record| record.client_name == client_name)
        .cloned()
        .collect()
}

/// Summary scalars for a client subset.
pub fn compute_kpis(subset: &[HoldingRecord]) -> KpiSet {
    let total_investment: Decimal = subset.iter().map(|r| r.investment_amount).sum();
    let total_market_value: Decimal = subset.iter().map(|r| r.market_value).sum();

    KpiSet {
        total_investment,
        total_market_value,
        net_gain_loss: total_market_value - total_investment,
        target_annual_growth: mean(subset.iter().map(|r| r.annualized_expected_growth)),
        actual_annual_growth: mean(subset.iter().map(|r| r.actual_annual_growth)),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (count, sum) = values.fold((0usize, 0.0), |(count, sum), v| (count + 1, sum + v));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Annual growth rate, in percent, needed to reach `target.target_increase`
/// on `total_investment` within `target.years` years:
/// `((increase / investment) ^ (1/years) - 1) * 100`.
///
/// Guarded compute: `None` unless investment, increase, and years are all
/// positive. Skipping is not an error.
pub fn required_growth(target: &GrowthTarget, total_investment: Decimal) -> Option<f64> {
    if total_investment <= Decimal::ZERO
        || target.target_increase <= Decimal::ZERO
        || target.years == 0
    {
        return None;
    }

    let ratio = (target.target_increase / total_investment).to_f64()?;
    Some((ratio.powf(1.0 / f64::from(target.years)) - 1.0) * 100.0)
}

/// Positions currently worth less than their invested amount, most
/// underwater first. The sort is stable, so ties keep original row order.
pub fn at_risk_holdings(subset: &[HoldingRecord]) -> Vec<AtRiskHolding> {
    let mut at_risk: Vec<AtRiskHolding> = subset
        .iter()
        .filter(|record| record.is_at_risk())
        .map(AtRiskHolding::from_record)
        .collect();
    at_risk.sort_by(|a, b| a.gain_loss.cmp(&b.gain_loss));
    at_risk
}

/// Invested amount and current value per sector, sorted by net gain/loss
/// descending. The sort is stable, so equal sectors keep first-seen order.
pub fn sector_summary(subset: &[HoldingRecord]) -> Vec<SectorPerformance> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut summary: Vec<SectorPerformance> = Vec::new();

    for record in subset {
        let index = *positions.entry(record.sector.clone()).or_insert_with(|| {
            summary.push(SectorPerformance::new(&record.sector));
            summary.len() - 1
        });
        summary[index].add(record);
    }

    summary.sort_by(|a, b| b.net_gain_loss.cmp(&a.net_gain_loss));
    summary
}

/// Aggregate invested amount per product, largest first, truncated to
/// `limit`. Fewer distinct products than `limit` returns all of them.
pub fn top_holdings(subset: &[HoldingRecord], limit: usize) -> Vec<TopHolding> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<TopHolding> = Vec::new();

    for record in subset {
        let index = *positions
            .entry(record.product_name.clone())
            .or_insert_with(|| {
                totals.push(TopHolding {
                    product_name: record.product_name.clone(),
                    total_invested: Decimal::ZERO,
                });
                totals.len() - 1
            });
        totals[index].total_invested += record.investment_amount;
    }

    totals.sort_by(|a, b| b.total_invested.cmp(&a.total_invested));
    totals.truncate(limit);
    totals
}
