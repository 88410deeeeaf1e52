use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default page number when the caller omits or zeroes it.
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size when the caller omits or zeroes it.
pub const DEFAULT_LIMIT: u32 = 50;

/// One campaign's advertising metrics for one day.
///
/// `clicks <= impressions` and `conversions <= clicks` are expected of any
/// sane dataset but are not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    /// Stable identity; unique within a dataset.
    pub id: u64,
    /// Display label, not unique across records.
    pub campaign_name: String,
    /// Advertising platform, e.g. "Google", "Facebook", "Naver".
    /// Open enumeration, kept as a string on purpose.
    pub channel: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub cost: f64,
    pub revenue: f64,
    pub date: NaiveDate,
}

/// The four derived ratios computed from a record's raw counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordKpis {
    /// Click-through rate, percent, 2 decimals.
    pub ctr: f64,
    /// Return on ad spend, 2 decimals.
    pub roas: f64,
    /// Cost per acquisition, whole currency units.
    pub cpa: f64,
    /// Conversions per click, percent, 2 decimals.
    pub conversion_rate: f64,
}

/// A raw record plus its derived KPIs. Serializes flat so the wire shape
/// matches the raw record with the four KPI fields appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedPerformanceRecord {
    #[serde(flatten)]
    pub record: PerformanceRecord,
    #[serde(flatten)]
    pub kpis: RecordKpis,
}

/// Date-range, channel, and paging constraints for one pipeline run.
///
/// Dates are inclusive ISO 8601 bounds; an absent bound is unbounded.
/// An absent or empty channel list means no channel restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl FilterParams {
    /// Effective page number: absent or zero clamps to [`DEFAULT_PAGE`].
    pub fn resolve_page(&self) -> u32 {
        self.page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE)
    }

    /// Effective page size: absent or zero clamps to [`DEFAULT_LIMIT`].
    pub fn resolve_limit(&self) -> u32 {
        self.limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT)
    }
}

/// Summary KPIs over a filtered record set. The four averages are derived
/// from the totals, never from a mean of per-record KPI values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiAggregateData {
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_conversions: u64,
    pub total_cost: f64,
    pub total_revenue: f64,
    #[serde(rename = "averageCTR")]
    pub average_ctr: f64,
    #[serde(rename = "averageROAS")]
    pub average_roas: f64,
    #[serde(rename = "averageCPA")]
    pub average_cpa: f64,
    pub average_conversion_rate: f64,
}

/// One window of an ordered record set plus paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Size of the full set being windowed, not of this page.
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: usize,
}

/// Envelope returned by the remote data origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
