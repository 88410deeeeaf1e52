//! Per-record KPI derivation. Pure functions; every division is guarded so
//! a zero denominator yields 0 rather than NaN or infinity.

use admetrics_core::types::{EnhancedPerformanceRecord, PerformanceRecord, RecordKpis};

/// Round to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive the four standard marketing KPIs from a record's raw counters.
///
/// CTR and conversion rate are percentages rounded to 2 decimals, ROAS is a
/// plain ratio rounded to 2 decimals, and CPA is rounded to the nearest
/// whole currency unit.
pub fn calculate_kpis(record: &PerformanceRecord) -> RecordKpis {
    let ctr = if record.impressions > 0 {
        record.clicks as f64 / record.impressions as f64 * 100.0
    } else {
        0.0
    };
    let roas = if record.cost > 0.0 {
        record.revenue / record.cost
    } else {
        0.0
    };
    let cpa = if record.conversions > 0 {
        record.cost / record.conversions as f64
    } else {
        0.0
    };
    let conversion_rate = if record.clicks > 0 {
        record.conversions as f64 / record.clicks as f64 * 100.0
    } else {
        0.0
    };

    RecordKpis {
        ctr: round2(ctr),
        roas: round2(roas),
        cpa: cpa.round(),
        conversion_rate: round2(conversion_rate),
    }
}

/// Attach derived KPIs to every record. 1:1, input order preserved.
pub fn enrich(records: &[PerformanceRecord]) -> Vec<EnhancedPerformanceRecord> {
    records
        .iter()
        .map(|record| EnhancedPerformanceRecord {
            record: record.clone(),
            kpis: calculate_kpis(record),
        })
        .collect()
}
