//! Configuration loader for smbchat.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`ChatbotConfig`]. Falls back to defaults when the file is missing or
//! malformed, then applies environment overrides.

use std::path::Path;

use smbchat_types::config::ChatbotConfig;

use crate::filesystem::config_path;

pub const RETRIEVAL_ENDPOINT_ENV: &str = "SMBCHAT_RETRIEVAL_ENDPOINT";
pub const RETRIEVAL_API_KEY_ENV: &str = "SMBCHAT_RETRIEVAL_API_KEY";

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: defaults.
/// - Unreadable or unparsable file: logs a warning, defaults.
/// - Environment overrides are applied in every case.
pub async fn load_config(data_dir: &Path) -> ChatbotConfig {
    let mut config = read_config_file(data_dir).await;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config
}

async fn read_config_file(data_dir: &Path) -> ChatbotConfig {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", path.display());
            return ChatbotConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ChatbotConfig::default();
        }
    };

    match toml::from_str::<ChatbotConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ChatbotConfig::default()
        }
    }
}

/// Apply `SMBCHAT_RETRIEVAL_*` overrides. Empty values are ignored.
pub fn apply_env_overrides(config: &mut ChatbotConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(endpoint) = lookup(RETRIEVAL_ENDPOINT_ENV).filter(|v| !v.is_empty()) {
        config.retrieval.endpoint = endpoint;
    }
    if let Some(key) = lookup(RETRIEVAL_API_KEY_ENV).filter(|v| !v.is_empty()) {
        config.retrieval.api_key = Some(key);
    }
}
