use coffee_rec_api::api::{parse_endpoint, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

pub const ENDPOINT_ENV: &str = "COFFEE_REC_API_URL";
pub const TIMEOUT_ENV: &str = "COFFEE_REC_TIMEOUT_SECS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub mouse: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config.validated(),
            Err(e) => {
                if path.exists() {
                    warn!("Ignoring unreadable config {}: {}", path.display(), e);
                }
                Self::default()
            }
        }
    }

    pub fn with_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            match parse_endpoint(&endpoint) {
                Ok(url) => self.service.endpoint = url.to_string(),
                Err(e) => warn!("Ignoring {}: {}", ENDPOINT_ENV, e),
            }
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.service.timeout_seconds = secs,
                _ => warn!("Ignoring {}: expected a positive integer, got {:?}", TIMEOUT_ENV, raw),
            }
        }

        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_seconds.max(1))
    }

    fn validated(mut self) -> Self {
        if let Err(e) = parse_endpoint(&self.service.endpoint) {
            warn!("Falling back to default endpoint: {}", e);
            self.service.endpoint = DEFAULT_ENDPOINT.to_string();
        }
        if self.service.timeout_seconds == 0 {
            self.service.timeout_seconds = DEFAULT_TIMEOUT.as_secs();
        }
        self
    }
}
