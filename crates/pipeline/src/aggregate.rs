//! Summary KPIs over a filtered, enriched record set.
//!
//! Averages are derived from the summed totals, never by averaging the
//! per-record KPI values. `totalRevenue / totalCost` and `mean(roas)`
//! diverge as soon as costs are skewed across records.

use admetrics_core::types::{EnhancedPerformanceRecord, KpiAggregateData};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum the five raw fields and derive the four averages from those totals.
/// Empty input yields all-zero totals and averages, not an error.
pub fn aggregate(records: &[EnhancedPerformanceRecord]) -> KpiAggregateData {
    let mut impressions: u64 = 0;
    let mut clicks: u64 = 0;
    let mut conversions: u64 = 0;
    let mut cost: f64 = 0.0;
    let mut revenue: f64 = 0.0;

    for enhanced in records {
        impressions += enhanced.record.impressions;
        clicks += enhanced.record.clicks;
        conversions += enhanced.record.conversions;
        cost += enhanced.record.cost;
        revenue += enhanced.record.revenue;
    }

    let average_ctr = if impressions > 0 {
        clicks as f64 / impressions as f64 * 100.0
    } else {
        0.0
    };
    let average_roas = if cost > 0.0 { revenue / cost } else { 0.0 };
    let average_cpa = if conversions > 0 {
        cost / conversions as f64
    } else {
        0.0
    };
    let average_conversion_rate = if clicks > 0 {
        conversions as f64 / clicks as f64 * 100.0
    } else {
        0.0
    };

    KpiAggregateData {
        total_impressions: impressions,
        total_clicks: clicks,
        total_conversions: conversions,
        total_cost: cost,
        total_revenue: revenue,
        average_ctr: round2(average_ctr),
        average_roas: round2(average_roas),
        average_cpa: average_cpa.round(),
        average_conversion_rate: round2(average_conversion_rate),
    }
}
