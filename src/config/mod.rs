//! # Exporter Configuration
//!
//! Run-level configuration loaded from environment variables.
//!
//! Everything is read once at startup and handed to the components that need it.
//! Command-line flags (see `main.rs`) take precedence over the environment.

use std::collections::HashMap;

use tracing::warn;

use crate::constants::{
    DEFAULT_TAG_PREFIX, DEFAULT_VERSION_STAGE, ENDPOINT_ENV, REGION_ENV, SECRETS_PATH_ENV,
    VERSION_STAGE_ENV,
};

/// Exporter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    /// AWS region for Secrets Manager calls
    /// `None` defers to the SDK default region chain (profile, IMDS)
    pub region: Option<String>,
    /// Prefix prepended verbatim to binary secret file names
    /// Usually a directory with a trailing slash, e.g. `/etc/secrets/`
    pub secrets_path: String,
    /// Prefix identifying tag filter variables
    pub tag_prefix: String,
    /// Version stage requested from `GetSecretValue`
    pub version_stage: String,
    /// Optional Secrets Manager endpoint override
    pub endpoint_url: Option<String>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            region: None,
            secrets_path: String::new(),
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            version_stage: DEFAULT_VERSION_STAGE.to_string(),
            endpoint_url: None,
        }
    }
}

impl ExporterConfig {
    /// Load configuration from the process environment with defaults
    pub fn from_env() -> Self {
        Self::from_vars(process_vars())
    }

    /// Load configuration from an explicit set of environment variables
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let defaults = Self::default();

        Self {
            region: non_empty(&vars, REGION_ENV),
            secrets_path: vars
                .get(SECRETS_PATH_ENV)
                .cloned()
                .unwrap_or(defaults.secrets_path),
            tag_prefix: defaults.tag_prefix,
            version_stage: non_empty(&vars, VERSION_STAGE_ENV).unwrap_or(defaults.version_stage),
            endpoint_url: non_empty(&vars, ENDPOINT_ENV),
        }
    }
}

/// Snapshot of the process environment
///
/// Entries whose name or value is not valid UTF-8 are skipped; only the name is logged.
pub fn process_vars() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (Ok(key), Err(_)) => {
                warn!("Ignoring environment variable '{}' with a non-UTF-8 value", key);
                None
            }
            (Err(key), _) => {
                warn!(
                    "Ignoring environment variable '{}' with a non-UTF-8 name",
                    key.to_string_lossy()
                );
                None
            }
        })
        .collect()
}

/// Read a variable, treating an empty value as unset
fn non_empty(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    vars.get(key).filter(|v| !v.trim().is_empty()).cloned()
}
