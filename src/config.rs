use crate::error::{Result, ServiceError};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const GOOGLE_TRANSLATE_ENDPOINT: &str =
    "https://translation.googleapis.com/language/translate/v2";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            name: default_name(),
            provider: ProviderConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_addr() -> String {
    ":8080".to_string()
}

fn default_name() -> String {
    "translate".to_string()
}

fn default_endpoint() -> String {
    GOOGLE_TRANSLATE_ENDPOINT.to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    3
}

impl ServiceConfig {
    /// Load config from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ServiceError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Search standard locations for a config file.
    /// Priority: CLI arg > CWD > XDG config > home dir > built-in defaults
    pub fn find_and_load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::load(path);
        }

        for candidate in config_search_paths() {
            if candidate.exists() {
                tracing::info!(path = %candidate.display(), "Loading config");
                return Self::load(&candidate);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Resolve the API key from the configured environment variable
    pub fn resolve_api_key(&self) -> Result<String> {
        match std::env::var(&self.provider.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(ServiceError::config(format!(
                "Environment variable '{}' must be set",
                self.provider.api_key_env
            ))),
        }
    }

    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.provider.endpoint).map_err(|e| {
            ServiceError::config(format!(
                "Invalid provider endpoint '{}': {}",
                self.provider.endpoint, e
            ))
        })
    }

    /// Apply a CLI/`ADDR` override. An empty value counts as unset.
    pub fn override_addr(&mut self, addr: Option<String>) {
        if let Some(addr) = addr.filter(|a| !a.is_empty()) {
            self.addr = addr;
        }
    }

    /// Listen address suitable for `TcpListener::bind`. A bare `:port` binds all interfaces.
    pub fn bind_addr(&self) -> String {
        if self.addr.starts_with(':') {
            format!("0.0.0.0{}", self.addr)
        } else {
            self.addr.clone()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.provider.timeout_secs)
    }
}

pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("translate-service.toml")];

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        paths.push(
            PathBuf::from(xdg)
                .join("translate-service")
                .join("config.toml"),
        );
    }

    if let Some(home) = home_dir() {
        paths.push(
            home.join(".config")
                .join("translate-service")
                .join("config.toml"),
        );
        paths.push(home.join(".translate-service.toml"));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
