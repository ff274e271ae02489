//! Configuration for skyfare.
//!
//! Provider credentials come from environment variables, optionally
//! overridden by a `skyfare.config.yml` file. Missing values resolve to
//! empty strings on purpose: a bad or absent credential is rejected by the
//! provider at the network boundary, where its error text is far more
//! useful than a config-load failure would be.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "skyfare.config.yml";

const CLIENT_ID_VAR: &str = "AMADEUS_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "AMADEUS_CLIENT_SECRET";

/// Sandbox host of the provider; production deployments override it via
/// the config file.
pub const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

/// Client id/secret pair for the credential-grant exchange.
///
/// Values are never logged and never embedded in progress or error
/// messages.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ProviderCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads credentials from the environment.
    ///
    /// Unset variables become empty strings; the exchange then fails at
    /// the token endpoint with the provider's own rejection text.
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var(CLIENT_ID_VAR).unwrap_or_default(),
            client_secret: std::env::var(CLIENT_SECRET_VAR).unwrap_or_default(),
        }
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub base_url: Option<String>,
    /// Travel class applied when the command line does not name one.
    pub travel_class: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref base_url) = config.base_url {
        if base_url.trim().is_empty() {
            bail!(
                "Invalid config: base_url must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default host, or set a full URL such as \"{}\".",
                DEFAULT_BASE_URL
            );
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            bail!(
                "Invalid config: base_url must start with http:// or https:// (got \"{}\").",
                base_url
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
