//! Checker configuration
//!
//! Built-in defaults, then an optional `config.json` in the user config
//! directory, then `PHISHCHECK_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Local development server of the prediction service
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PREDICT_PATH: &str = "/predict";
pub const HEALTH_PATH: &str = "/healthz";

pub const ENV_API_BASE: &str = "PHISHCHECK_API_BASE";
pub const ENV_PREDICT_PATH: &str = "PHISHCHECK_PREDICT_PATH";
pub const ENV_API_KEY: &str = "PHISHCHECK_API_KEY";
pub const ENV_STALE_POLICY: &str = "PHISHCHECK_STALE_POLICY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

/// What to do with a response that arrives after a newer submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// Only the latest submission may write the state
    #[default]
    DropStale,
    /// Whichever response settles last wins
    LastSettledWins,
}

impl FromStr for StalePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drop-stale" => Ok(StalePolicy::DropStale),
            "last-settled-wins" => Ok(StalePolicy::LastSettledWins),
            other => Err(format!(
                "unknown stale policy '{}' (expected drop-stale or last-settled-wins)",
                other
            )),
        }
    }
}

impl fmt::Display for StalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StalePolicy::DropStale => write!(f, "drop-stale"),
            StalePolicy::LastSettledWins => write!(f, "last-settled-wins"),
        }
    }
}

/// Resolved configuration passed into the checker and its client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    pub api_base: String,
    pub predict_path: String,
    pub api_key: Option<String>,
    pub stale_policy: StalePolicy,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            predict_path: DEFAULT_PREDICT_PATH.to_string(),
            api_key: None,
            stale_policy: StalePolicy::default(),
        }
    }
}

/// On-disk shape of `config.json`; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    api_base: Option<String>,
    predict_path: Option<String>,
    api_key: Option<String>,
    stale_policy: Option<StalePolicy>,
}

/// Location of the optional config file
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("phishcheck").join("config.json"))
}

impl CheckerConfig {
    /// Load defaults, the user config file (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = config_path() {
            if path.exists() {
                config.merge_file(&path)?;
                tracing::debug!("Loaded config file {:?}", path);
            }
        }
        config.merge_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Overlay values from a JSON config file.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = non_empty(file.api_base) {
            self.api_base = base;
        }
        if let Some(predict_path) = non_empty(file.predict_path) {
            self.predict_path = predict_path;
        }
        if let Some(key) = non_empty(file.api_key) {
            self.api_key = Some(key);
        }
        if let Some(policy) = file.stale_policy {
            self.stale_policy = policy;
        }
        Ok(())
    }

    /// Overlay values from environment variables; `lookup` is `std::env::var` outside tests.
    pub fn merge_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = non_empty(lookup(ENV_API_BASE)) {
            self.api_base = base;
        }
        if let Some(predict_path) = non_empty(lookup(ENV_PREDICT_PATH)) {
            self.predict_path = predict_path;
        }
        if let Some(key) = non_empty(lookup(ENV_API_KEY)) {
            self.api_key = Some(key);
        }
        if let Some(policy) = non_empty(lookup(ENV_STALE_POLICY)) {
            self.stale_policy =
                policy
                    .parse::<StalePolicy>()
                    .map_err(|message| ConfigError::Invalid {
                        name: ENV_STALE_POLICY,
                        message,
                    })?;
        }
        Ok(())
    }

    /// Full URL of the prediction endpoint
    pub fn predict_url(&self) -> String {
        join_url(&self.api_base, &self.predict_path)
    }

    pub fn health_url(&self) -> String {
        join_url(&self.api_base, HEALTH_PATH)
    }
}

impl fmt::Display for CheckerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "predict endpoint: {}", self.predict_url())?;
        writeln!(f, "health endpoint:  {}", self.health_url())?;
        writeln!(
            f,
            "api key:          {}",
            if self.api_key.is_some() { "set" } else { "not set" }
        )?;
        write!(f, "stale responses:  {}", self.stale_policy)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
