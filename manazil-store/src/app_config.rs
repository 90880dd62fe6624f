use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Upper bound on concurrently open booking sessions
    #[serde(default = "default_max_active")]
    pub max_active: usize,
    /// Sessions untouched for this long are dropped by the sweeper
    #[serde(default = "default_idle_ttl_seconds")]
    pub idle_ttl_seconds: u64,
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

fn default_max_active() -> usize { 10_000 }
fn default_idle_ttl_seconds() -> u64 { 1800 }
fn default_sweep_interval_seconds() -> u64 { 60 }

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_active: default_max_active(),
            idle_ttl_seconds: default_idle_ttl_seconds(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `MANAZIL__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("MANAZIL").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
