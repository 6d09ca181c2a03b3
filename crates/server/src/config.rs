use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in KB
    #[serde(default = "default_max_body_size_kb")]
    pub max_body_size_kb: usize,

    /// CSV dataset loaded into the review store at startup
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Log level / `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format: "json" or "pretty"
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_kb: default_max_body_size_kb(),
            dataset_path: default_dataset_path(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from config files and environment variables.
    ///
    /// Precedence, lowest first: `server.{toml,yaml,json}` in the working
    /// directory, `REVIEWS_SERVER__*` variables, then a bare `PORT`.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .add_source(config::Environment::with_prefix("REVIEWS_SERVER").separator("__"));

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;
        config.apply_port(std::env::var("PORT").ok().as_deref())?;
        Ok(config)
    }

    /// Override the port from a raw `PORT` value; empty means unset.
    pub fn apply_port(&mut self, raw: Option<&str>) -> anyhow::Result<()> {
        if let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) {
            self.port = value
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT '{value}': {e}"))?;
        }
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_kb * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_kb() -> usize {
    64
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/reviews.csv")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}
