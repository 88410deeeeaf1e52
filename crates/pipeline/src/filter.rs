//! Date-range and channel filters. Pure, order-preserving, non-mutating.

use admetrics_core::types::PerformanceRecord;
use chrono::NaiveDate;
use tracing::warn;

/// Keep records whose date falls inside the inclusive `[start, end]` range.
///
/// An absent bound is unbounded on that side; with both bounds absent the
/// input comes back unchanged. A bound that fails to parse as an ISO 8601
/// date matches nothing rather than failing the pipeline.
pub fn filter_by_date_range(
    records: &[PerformanceRecord],
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Vec<PerformanceRecord> {
    if start_date.is_none() && end_date.is_none() {
        return records.to_vec();
    }

    let start = match parse_bound(start_date) {
        Ok(bound) => bound,
        Err(raw) => {
            warn!(bound = %raw, "Unparseable start date, matching nothing");
            return Vec::new();
        }
    };
    let end = match parse_bound(end_date) {
        Ok(bound) => bound,
        Err(raw) => {
            warn!(bound = %raw, "Unparseable end date, matching nothing");
            return Vec::new();
        }
    };

    records
        .iter()
        .filter(|record| {
            start.map_or(true, |s| record.date >= s) && end.map_or(true, |e| record.date <= e)
        })
        .cloned()
        .collect()
}

fn parse_bound(bound: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match bound {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| raw.to_string()),
    }
}

/// Keep records whose channel is in `channels` (exact, case-sensitive).
///
/// `None` or an empty list means no restriction, not "match nothing".
pub fn filter_by_channels(
    records: &[PerformanceRecord],
    channels: Option<&[String]>,
) -> Vec<PerformanceRecord> {
    match channels {
        None | Some([]) => records.to_vec(),
        Some(channels) => records
            .iter()
            .filter(|record| channels.contains(&record.channel))
            .cloned()
            .collect(),
    }
}
