use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `ADMETRICS__`. The core components take these values
/// as constructor parameters; only the binary reads the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Which origin feeds the record store and how long loads stay cached.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// "static" or "remote".
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Scenario served by the static origin.
    #[serde(default = "default_scenario")]
    pub scenario: String,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_origin() -> String {
    "static".to_string()
}

fn default_scenario() -> String {
    "current".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_endpoint() -> String {
    "http://localhost:4000/api/performance".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            remote: RemoteConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            scenario: default_scenario(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ADMETRICS")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
