use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};
use validator::ValidateEmail;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub relay: RelayConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// External email-relay webhook that delivers contact messages.
#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    pub endpoint: String,
    #[serde(default)]
    pub access_key: String,
    /// Site owner's inbox; every message is addressed here.
    pub recipient: String,
    pub timeout_secs: u64,
}

impl RelayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOLIO__RELAY__ACCESS_KEY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("relay.endpoint", "https://api.web3forms.com/submit")?
            .set_default("relay.recipient", "owner@folio.localhost")?
            .set_default("relay.timeout_secs", 10)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(access_key) = env::var("RELAY_ACCESS_KEY") {
            builder = builder.set_override("relay.access_key", access_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if let Err(e) = url::Url::parse(&self.relay.endpoint) {
            return Err(format!("Relay endpoint is not a valid URL: {e}"));
        }
        if !self.relay.recipient.validate_email() {
            return Err(format!(
                "Relay recipient `{}` is not a valid email address",
                self.relay.recipient
            ));
        }
        if self.relay.timeout_secs == 0 {
            return Err("Relay timeout must be at least 1 second".to_string());
        }
        Ok(())
    }
}
