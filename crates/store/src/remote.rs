//! Remote data origin: an HTTP endpoint returning the standard
//! `{status, data, meta}` envelope for a filtered performance query.

use admetrics_core::error::{MetricsError, MetricsResult};
use admetrics_core::types::{ApiResponse, FilterParams, PerformanceRecord};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A pluggable origin for raw performance records.
#[async_trait]
pub trait RemoteOrigin: Send + Sync {
    /// Fetch records matching `query`. Any transport error or non-success
    /// envelope status is a failure; the store decides what to do with it.
    async fn fetch(
        &self,
        query: &FilterParams,
    ) -> anyhow::Result<ApiResponse<Vec<PerformanceRecord>>>;
}

/// HTTP implementation backed by reqwest.
pub struct HttpOrigin {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOrigin {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> MetricsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| MetricsError::RemoteOrigin(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn query_pairs(query: &FilterParams) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = &query.start_date {
            pairs.push(("startDate", start.clone()));
        }
        if let Some(end) = &query.end_date {
            pairs.push(("endDate", end.clone()));
        }
        if let Some(channels) = &query.channel {
            for channel in channels {
                pairs.push(("channel", channel.clone()));
            }
        }
        if let Some(page) = query.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = query.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[async_trait]
impl RemoteOrigin for HttpOrigin {
    async fn fetch(
        &self,
        query: &FilterParams,
    ) -> anyhow::Result<ApiResponse<Vec<PerformanceRecord>>> {
        debug!(endpoint = %self.endpoint, "Fetching performance records");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&Self::query_pairs(query))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
