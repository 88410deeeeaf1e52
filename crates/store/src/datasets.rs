//! Static datasets embedded in the binary: the current dataset plus named
//! demo scenarios, and the single built-in record served when everything
//! else fails.

use admetrics_core::types::PerformanceRecord;
use admetrics_core::MetricsResult;

/// Scenario name for the primary static dataset.
pub const CURRENT_SCENARIO: &str = "current";

const CURRENT_DATASET: &str = include_str!("../data/current.json");
const NORMAL_CASE: &str = include_str!("../data/normal_case.json");

/// All scenario names the static origin can serve.
pub fn available_scenarios() -> Vec<&'static str> {
    vec![CURRENT_SCENARIO, "normal-case"]
}

/// Records for a named scenario, or `None` for an unknown name.
pub fn dataset(scenario: &str) -> MetricsResult<Option<Vec<PerformanceRecord>>> {
    let raw = match scenario {
        CURRENT_SCENARIO => CURRENT_DATASET,
        "normal-case" => NORMAL_CASE,
        _ => return Ok(None),
    };
    let records: Vec<PerformanceRecord> = serde_json::from_str(raw)?;
    Ok(Some(records))
}

/// The single record served when both the requested origin and the static
/// dataset fail. Keeps the "never show nothing" policy honest.
pub fn fallback_record() -> PerformanceRecord {
    PerformanceRecord {
        id: 1,
        campaign_name: "Default Campaign".to_string(),
        channel: "Google".to_string(),
        impressions: 10_000,
        clicks: 300,
        conversions: 15,
        cost: 150_000.0,
        revenue: 450_000.0,
        date: chrono::NaiveDate::from_ymd_opt(2024, 5, 27)
            .unwrap_or_default(),
    }
}
