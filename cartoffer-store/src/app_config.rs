use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;

use cartoffer_core::{CoreError, CoreResult};
use cartoffer_shared::Segment;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub segments: SegmentsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Redis,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    pub redis_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SegmentsConfig {
    /// Base URL of the user segment service
    pub service_url: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// user id -> segment label, used when no service is configured
    #[serde(default)]
    pub users: HashMap<String, String>,
}

fn default_timeout_ms() -> u64 { 2000 }

impl Default for SegmentsConfig {
    fn default() -> Self {
        Self {
            service_url: None,
            timeout_ms: default_timeout_ms(),
            users: HashMap::new(),
        }
    }
}

impl SegmentsConfig {
    /// Parse the configured user table. Keys must be integer user ids.
    pub fn user_table(&self) -> CoreResult<HashMap<i64, Segment>> {
        self.users
            .iter()
            .map(|(user_id, label)| {
                let id = user_id.trim().parse::<i64>().map_err(|_| {
                    CoreError::ConfigError(format!("segments.users key '{}' is not a user id", user_id))
                })?;
                Ok((id, Segment::new(label.as_str())))
            })
            .collect()
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name(&file("default")))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&file(&run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&file("local")).required(false))
            // Eg.. `CARTOFFER_SERVER__PORT=9002` sets `server.port`
            .add_source(
                config::Environment::with_prefix("CARTOFFER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
