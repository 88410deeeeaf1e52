//! AdMetrics — marketing performance analytics pipeline.
//!
//! Loads a campaign dataset (remote origin or embedded scenario), runs the
//! filter/enrich/aggregate/paginate pipeline, and prints the report as JSON.

use admetrics_core::config::AppConfig;
use admetrics_core::types::FilterParams;
use admetrics_store::{DataSource, HttpOrigin, RecordStore};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "admetrics")]
#[command(about = "Marketing performance analytics pipeline")]
#[command(version)]
struct Cli {
    /// Static scenario to load (overrides config)
    #[arg(long, env = "ADMETRICS__DATA__SCENARIO")]
    scenario: Option<String>,

    /// Load from the remote origin instead of the static catalog
    #[arg(long, default_value_t = false)]
    remote: bool,

    /// Remote origin endpoint (overrides config)
    #[arg(long, env = "ADMETRICS__REMOTE__ENDPOINT")]
    endpoint: Option<String>,

    /// Inclusive start date, ISO 8601 (e.g. 2024-05-01)
    #[arg(long)]
    start_date: Option<String>,

    /// Inclusive end date, ISO 8601
    #[arg(long)]
    end_date: Option<String>,

    /// Channel filter; repeat for multiple channels
    #[arg(long)]
    channel: Vec<String>,

    /// 1-based page number
    #[arg(long)]
    page: Option<u32>,

    /// Page size
    #[arg(long)]
    limit: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admetrics=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    if let Some(scenario) = cli.scenario {
        config.data.scenario = scenario;
    }
    if let Some(endpoint) = cli.endpoint {
        config.remote.endpoint = endpoint;
    }
    if cli.remote {
        config.data.origin = "remote".to_string();
    }

    let use_remote = config.data.origin == "remote";
    let store = if use_remote {
        let origin = HttpOrigin::new(config.remote.endpoint.clone(), config.remote.timeout_ms)?;
        RecordStore::with_origin(Arc::new(origin), config.data.cache_ttl_secs)
    } else {
        RecordStore::new(config.data.cache_ttl_secs)
    };

    let source = if use_remote {
        DataSource::Remote
    } else {
        DataSource::static_scenario(config.data.scenario.clone())
    };

    info!(
        origin = %config.data.origin,
        scenario = %config.data.scenario,
        "Loading performance records"
    );
    let loaded = store.load(&source).await;
    info!(
        records = loaded.records.len(),
        provenance = ?loaded.provenance,
        "Dataset ready"
    );

    let filters = FilterParams {
        start_date: cli.start_date,
        end_date: cli.end_date,
        channel: if cli.channel.is_empty() {
            None
        } else {
            Some(cli.channel)
        },
        page: cli.page,
        limit: cli.limit,
    };
    let report = admetrics_pipeline::run(&loaded.records, &filters);

    info!(
        total = report.page.total,
        total_pages = report.page.total_pages,
        average_roas = report.summary.average_roas,
        "Pipeline run complete"
    );

    let output = serde_json::json!({
        "summary": report.summary,
        "page": report.page,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
