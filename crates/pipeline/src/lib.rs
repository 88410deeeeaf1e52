//! Performance metrics pipeline — filtering, per-record KPI enrichment,
//! totals-based aggregation, and pagination over advertising records.
//!
//! One synchronous pass: filter the raw records, enrich each survivor with
//! its derived KPIs, then aggregate the full enriched set and window it
//! into a page. Aggregation and pagination both consume the same filtered
//! set; neither depends on the other.

pub mod aggregate;
pub mod enrich;
pub mod filter;
pub mod paginate;

pub use aggregate::aggregate;
pub use enrich::{calculate_kpis, enrich};
pub use filter::{filter_by_channels, filter_by_date_range};
pub use paginate::paginate;

use admetrics_core::types::{
    EnhancedPerformanceRecord, FilterParams, KpiAggregateData, Page, PerformanceRecord,
};
use tracing::debug;

/// Output of one pipeline run: the page the grid displays plus the summary
/// KPIs over the whole filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub page: Page<EnhancedPerformanceRecord>,
    pub summary: KpiAggregateData,
}

/// Run the full pipeline over `records` with the given filters.
///
/// Never fails on well-typed input: malformed filter dates match nothing
/// and out-of-range pages come back empty with correct metadata.
pub fn run(records: &[PerformanceRecord], filters: &FilterParams) -> PipelineReport {
    let filtered = filter_by_date_range(
        records,
        filters.start_date.as_deref(),
        filters.end_date.as_deref(),
    );
    let filtered = filter_by_channels(&filtered, filters.channel.as_deref());
    let enhanced = enrich(&filtered);

    let summary = aggregate(&enhanced);
    let page = paginate(&enhanced, filters.resolve_page(), filters.resolve_limit());

    debug!(
        input = records.len(),
        filtered = filtered.len(),
        page = page.page,
        page_records = page.data.len(),
        "Pipeline run complete"
    );

    PipelineReport { page, summary }
}
