use average::Mean;
use serde::Serialize;

use crate::{
    core::simulator::YearlyBreakdown,
    quantity::{Zero, cost::Gbp},
};

/// One point of the cumulative-savings chart series.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct ChartPoint {
    pub year: u32,
    pub cumulative: Gbp,
}

/// Aggregate metrics over the whole simulation horizon.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub total_cost: Gbp,
    pub average_yearly_savings: Gbp,
    pub average_monthly_savings: Gbp,

    /// First year in which cumulative savings exceed zero, `None` when the
    /// installation never pays back within the horizon.
    pub payback_year: Option<u32>,

    pub roi_percentage: f64,
    pub yearly_breakdown: Option<Vec<YearlyBreakdown>>,
    pub chart: Vec<ChartPoint>,
}

/// Fold the yearly records into cumulative savings and derived metrics.
///
/// The cumulative column is recomputed from scratch on every call, so calling
/// this twice on the same breakdown list yields an identical result.
pub fn aggregate(
    initial_cost: Gbp,
    breakdowns: &mut [YearlyBreakdown],
    include_breakdown: bool,
) -> RoiResult {
    let mut cumulative = -initial_cost;
    let mut chart = Vec::with_capacity(breakdowns.len() + 1);
    chart.push(ChartPoint { year: 0, cumulative });

    let mut payback_year = None;
    for breakdown in breakdowns.iter_mut() {
        cumulative += breakdown.yearly_total;
        breakdown.cumulative = cumulative;
        if payback_year.is_none() && cumulative > Gbp::ZERO {
            payback_year = Some(breakdown.year);
        }
        chart.push(ChartPoint { year: breakdown.year, cumulative });
    }

    // Years fully degraded to zero savings would skew the average downwards.
    let mean: Mean = breakdowns
        .iter()
        .map(|breakdown| breakdown.yearly_total.0)
        .filter(|total| *total > 0.0)
        .collect();
    let average_yearly_savings = if mean.is_empty() { Gbp::ZERO } else { Gbp(mean.mean()) };

    let roi_percentage = if initial_cost > Gbp::ZERO {
        (cumulative + initial_cost).0 / initial_cost.0 * 100.0
    } else {
        0.0
    };

    RoiResult {
        total_cost: initial_cost,
        average_yearly_savings,
        average_monthly_savings: average_yearly_savings / 12.0,
        payback_year,
        roi_percentage,
        yearly_breakdown: include_breakdown.then(|| breakdowns.to_vec()),
        chart,
    }
}
