use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use allsvenskan_api::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Port: {}", config.server.port);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so deployments can tell which configuration is live.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

/// Applies process environment overrides (`PORT`, `APP_ENV`)
pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Applies environment overrides read through `lookup`
///
/// `PORT` replaces the listen port. `APP_ENV=development` points the views at
/// the API on localhost instead of the deployed base URL. The result is
/// validated again.
pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|e| ConfigError::Validation(format!("Invalid PORT '{}': {}", port, e)))?;
    }

    if lookup("APP_ENV").as_deref() == Some("development") {
        config.views.api_base_url = format!("http://localhost:{}", config.server.port);
    }

    validate(config)
}
