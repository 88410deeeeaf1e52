//! Record store: serves the raw dataset for a requested source, with a
//! TTL cache and a fallback chain that never hands the caller an empty or
//! errored payload.
//!
//! Explicitly constructed and injectable; callers hold the instance rather
//! than reaching for a module-global singleton. Expiry is pull-based: each
//! read checks the entry's age instead of trusting a background timer.

use crate::datasets;
use crate::remote::RemoteOrigin;
use admetrics_core::types::{ApiStatus, FilterParams, PerformanceRecord};
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Page size requested from the remote origin for a full dataset load.
const REMOTE_LOAD_LIMIT: u32 = 100;

/// Which origin a load request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The remote HTTP origin.
    Remote,
    /// The embedded static catalog, by scenario name.
    Static { scenario: String },
}

impl DataSource {
    pub fn static_scenario(scenario: impl Into<String>) -> Self {
        Self::Static {
            scenario: scenario.into(),
        }
    }

    fn cache_key(&self) -> String {
        match self {
            Self::Remote => "remote-dataset".to_string(),
            Self::Static { scenario } => format!("scenario-{scenario}"),
        }
    }
}

/// Which path actually produced the records a load returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataProvenance {
    /// The requested origin answered.
    Origin,
    /// The requested origin failed; the static catalog answered instead.
    StaticFallback,
    /// Every origin failed; this is the single built-in record.
    BuiltinDefault,
}

/// A loaded record set tagged with where it actually came from, so callers
/// can distinguish "no data" from "served by fallback".
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub records: Vec<PerformanceRecord>,
    pub provenance: DataProvenance,
}

struct CacheEntry {
    records: Vec<PerformanceRecord>,
    provenance: DataProvenance,
    inserted_at: Instant,
}

/// TTL-cached record store over a remote origin and the static catalog.
pub struct RecordStore {
    origin: Option<Arc<dyn RemoteOrigin>>,
    cache: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl RecordStore {
    /// Store serving the static catalog only.
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            origin: None,
            cache: DashMap::new(),
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    /// Store that tries `origin` first for [`DataSource::Remote`] loads.
    pub fn with_origin(origin: Arc<dyn RemoteOrigin>, ttl_secs: u64) -> Self {
        Self {
            origin: Some(origin),
            ..Self::new(ttl_secs)
        }
    }

    /// Load the full record set for `source`.
    ///
    /// A cache hit returns the previous result without touching the origin.
    /// Otherwise the fallback chain runs: requested origin, then the static
    /// `current` dataset, then the built-in record. Only loads answered by
    /// the requested origin are cached; fallback results are retried on the
    /// next call.
    pub async fn load(&self, source: &DataSource) -> LoadedDataset {
        let key = source.cache_key();
        if let Some(hit) = self.cached(&key) {
            debug!(%key, records = hit.records.len(), "Record cache hit");
            return hit;
        }

        let loaded = match source {
            DataSource::Remote => self.load_remote().await,
            DataSource::Static { scenario } => self.load_static(scenario),
        };

        if loaded.provenance == DataProvenance::Origin {
            self.cache.insert(
                key,
                CacheEntry {
                    records: loaded.records.clone(),
                    provenance: loaded.provenance,
                    inserted_at: Instant::now(),
                },
            );
        }

        loaded
    }

    /// All scenario names the static catalog can serve.
    pub fn available_scenarios(&self) -> Vec<&'static str> {
        datasets::available_scenarios()
    }

    /// Drop every cached load.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Record count per live cache key. Debugging aid.
    pub fn cache_status(&self) -> HashMap<String, usize> {
        self.cache
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().records.len()))
            .collect()
    }

    fn cached(&self, key: &str) -> Option<LoadedDataset> {
        let entry = self.cache.get(key)?;
        if entry.inserted_at.elapsed() > self.ttl {
            drop(entry);
            self.cache.remove(key);
            return None;
        }
        Some(LoadedDataset {
            records: entry.records.clone(),
            provenance: entry.provenance,
        })
    }

    async fn load_remote(&self) -> LoadedDataset {
        match &self.origin {
            Some(origin) => {
                let query = FilterParams {
                    limit: Some(REMOTE_LOAD_LIMIT),
                    ..Default::default()
                };
                match origin.fetch(&query).await {
                    Ok(response) if response.status == ApiStatus::Success => {
                        info!(
                            records = response.data.len(),
                            "Loaded records from remote origin"
                        );
                        return LoadedDataset {
                            records: response.data,
                            provenance: DataProvenance::Origin,
                        };
                    }
                    Ok(_) => {
                        warn!("Remote origin returned an error envelope, using static fallback")
                    }
                    Err(error) => {
                        warn!(%error, "Remote origin fetch failed, using static fallback")
                    }
                }
            }
            None => warn!("No remote origin configured, using static fallback"),
        }

        let fallback = self.load_static(datasets::CURRENT_SCENARIO);
        let provenance = match fallback.provenance {
            DataProvenance::BuiltinDefault => DataProvenance::BuiltinDefault,
            _ => DataProvenance::StaticFallback,
        };
        LoadedDataset {
            records: fallback.records,
            provenance,
        }
    }

    fn load_static(&self, scenario: &str) -> LoadedDataset {
        match datasets::dataset(scenario) {
            Ok(Some(records)) if !records.is_empty() => {
                info!(scenario, records = records.len(), "Loaded static dataset");
                LoadedDataset {
                    records,
                    provenance: DataProvenance::Origin,
                }
            }
            Ok(Some(_)) => {
                warn!(scenario, "Static dataset is empty, serving built-in record");
                builtin_dataset()
            }
            Ok(None) => {
                warn!(scenario, "Unknown scenario, serving current dataset");
                match datasets::dataset(datasets::CURRENT_SCENARIO) {
                    Ok(Some(records)) if !records.is_empty() => LoadedDataset {
                        records,
                        provenance: DataProvenance::Origin,
                    },
                    _ => builtin_dataset(),
                }
            }
            Err(error) => {
                warn!(scenario, %error, "Static dataset failed to parse, serving built-in record");
                builtin_dataset()
            }
        }
    }
}

fn builtin_dataset() -> LoadedDataset {
    LoadedDataset {
        records: vec![datasets::fallback_record()],
        provenance: DataProvenance::BuiltinDefault,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteOrigin;
    use admetrics_core::types::ApiResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted origin: fails the first `fail_first` calls, then succeeds.
    struct ScriptedOrigin {
        fail_first: usize,
        error_envelope: bool,
        calls: AtomicUsize,
        records: Vec<PerformanceRecord>,
    }

    impl ScriptedOrigin {
        fn succeeding(records: Vec<PerformanceRecord>) -> Self {
            Self {
                fail_first: 0,
                error_envelope: false,
                calls: AtomicUsize::new(0),
                records,
            }
        }

        fn failing() -> Self {
            Self {
                fail_first: usize::MAX,
                error_envelope: false,
                calls: AtomicUsize::new(0),
                records: Vec::new(),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RemoteOrigin for ScriptedOrigin {
        async fn fetch(
            &self,
            _query: &FilterParams,
        ) -> anyhow::Result<ApiResponse<Vec<PerformanceRecord>>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_first {
                anyhow::bail!("connection refused");
            }
            Ok(ApiResponse {
                status: if self.error_envelope {
                    ApiStatus::Error
                } else {
                    ApiStatus::Success
                },
                data: self.records.clone(),
                meta: None,
            })
        }
    }

    fn sample_records() -> Vec<PerformanceRecord> {
        vec![datasets::fallback_record()]
    }

    // 1. Static loads ------------------------------------------------------

    #[tokio::test]
    async fn test_static_current_load() {
        let store = RecordStore::new(300);
        let loaded = store
            .load(&DataSource::static_scenario(datasets::CURRENT_SCENARIO))
            .await;

        assert_eq!(loaded.records.len(), 35);
        assert_eq!(loaded.provenance, DataProvenance::Origin);
    }

    #[tokio::test]
    async fn test_unknown_scenario_serves_current_dataset() {
        let store = RecordStore::new(300);
        let loaded = store
            .load(&DataSource::static_scenario("seasonal-campaign"))
            .await;

        assert_eq!(loaded.records.len(), 35);
        assert_eq!(loaded.provenance, DataProvenance::Origin);
    }

    // 2. Remote loads and the fallback chain -------------------------------

    #[tokio::test]
    async fn test_remote_success_is_tagged_origin() {
        let origin = Arc::new(ScriptedOrigin::succeeding(sample_records()));
        let store = RecordStore::with_origin(origin.clone(), 300);

        let loaded = store.load(&DataSource::Remote).await;
        assert_eq!(loaded.provenance, DataProvenance::Origin);
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(origin.calls(), 1);
    }

    #[tokio::test]
    async fn test_remote_transport_failure_falls_back_to_static() {
        let origin = Arc::new(ScriptedOrigin::failing());
        let store = RecordStore::with_origin(origin, 300);

        let loaded = store.load(&DataSource::Remote).await;
        assert_eq!(loaded.provenance, DataProvenance::StaticFallback);
        assert_eq!(loaded.records.len(), 35);
    }

    #[tokio::test]
    async fn test_remote_error_envelope_falls_back_to_static() {
        let origin = Arc::new(ScriptedOrigin {
            fail_first: 0,
            error_envelope: true,
            calls: AtomicUsize::new(0),
            records: Vec::new(),
        });
        let store = RecordStore::with_origin(origin, 300);

        let loaded = store.load(&DataSource::Remote).await;
        assert_eq!(loaded.provenance, DataProvenance::StaticFallback);
        assert!(!loaded.records.is_empty());
    }

    #[tokio::test]
    async fn test_missing_origin_falls_back_to_static() {
        let store = RecordStore::new(300);
        let loaded = store.load(&DataSource::Remote).await;
        assert_eq!(loaded.provenance, DataProvenance::StaticFallback);
    }

    // 3. Cache behavior ----------------------------------------------------

    #[tokio::test]
    async fn test_cache_hit_skips_the_origin() {
        let origin = Arc::new(ScriptedOrigin::succeeding(sample_records()));
        let store = RecordStore::with_origin(origin.clone(), 300);

        store.load(&DataSource::Remote).await;
        store.load(&DataSource::Remote).await;
        assert_eq!(origin.calls(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_reinvokes_the_origin() {
        let origin = Arc::new(ScriptedOrigin::succeeding(sample_records()));
        let store = RecordStore::with_origin(origin.clone(), 0);

        store.load(&DataSource::Remote).await;
        store.load(&DataSource::Remote).await;
        assert_eq!(origin.calls(), 2);
    }

    #[tokio::test]
    async fn test_fallback_results_are_not_cached() {
        let origin = Arc::new(ScriptedOrigin {
            fail_first: 1,
            error_envelope: false,
            calls: AtomicUsize::new(0),
            records: sample_records(),
        });
        let store = RecordStore::with_origin(origin.clone(), 300);

        let first = store.load(&DataSource::Remote).await;
        assert_eq!(first.provenance, DataProvenance::StaticFallback);

        // Failure was not cached, so the origin gets another chance.
        let second = store.load(&DataSource::Remote).await;
        assert_eq!(second.provenance, DataProvenance::Origin);
        assert_eq!(origin.calls(), 2);
    }

    #[tokio::test]
    async fn test_scenario_catalog_is_exposed() {
        let store = RecordStore::new(300);
        assert_eq!(store.available_scenarios(), vec!["current", "normal-case"]);
    }

    #[tokio::test]
    async fn test_clear_cache_and_status() {
        let store = RecordStore::new(300);
        store
            .load(&DataSource::static_scenario(datasets::CURRENT_SCENARIO))
            .await;

        let status = store.cache_status();
        assert_eq!(status.get("scenario-current"), Some(&35));

        store.clear_cache();
        assert!(store.cache_status().is_empty());
    }
}
