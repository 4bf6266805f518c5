/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use soulwave_recommend::{RecommendConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "soulwave.toml";

/// Environment prefix; `SOULWAVE__RECOMMEND__MODEL` sets `recommend.model`
pub const ENV_PREFIX: &str = "SOULWAVE";

/// Key variable honoured when no key is configured otherwise
pub const LEGACY_API_KEY_VAR: &str = "API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub recommend: RecommendSettings,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendSettings {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl AppConfig {
    /// Load configuration from file and the process environment
    ///
    /// `path` must exist when given; otherwise `soulwave.toml` is read if
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::load_from(path, None)?;
        config.apply_legacy_key(std::env::var(LEGACY_API_KEY_VAR).ok());
        Ok(config)
    }

    /// Load configuration with an explicit environment
    ///
    /// `env` replaces the process environment when given.
    pub fn load_from(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (SOULWAVE__SECTION__KEY)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Use `key` when no API key is configured
    pub fn apply_legacy_key(&mut self, key: Option<String>) {
        let configured = self
            .recommend
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());
        if !configured {
            if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
                self.recommend.api_key = Some(key);
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.recommend.model.trim().is_empty() {
            return Err(CliError::Config("recommend.model cannot be empty".to_string()));
        }
        if self.recommend.timeout_secs == 0 {
            return Err(CliError::Config(
                "recommend.timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Client configuration for the mood recommender
    pub fn recommend_config(&self) -> RecommendConfig {
        RecommendConfig {
            api_key: self.recommend.api_key.clone(),
            model: self.recommend.model.clone(),
            base_url: self.recommend.base_url.clone(),
            timeout: Duration::from_secs(self.recommend.timeout_secs),
        }
    }
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

// Default values
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_filter() -> String {
    "soulwave=info".to_string()
}
