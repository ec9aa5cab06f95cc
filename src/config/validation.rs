use crate::config::types::{
    CompetitionConfig, Config, ServerConfig, UpstreamConfig, UserAgentConfig,
};
use crate::views::VIEW_PAGES;
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_upstream_config(&config.upstream)?;
    validate_http_url("views.api-base-url", &config.views.api_base_url)?;
    validate_competitions(&config.competitions)?;
    Ok(())
}

fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.port == 0 {
        return Err(ConfigError::Validation("port must be non-zero".to_string()));
    }

    if config.host.trim().is_empty() {
        return Err(ConfigError::Validation("host cannot be empty".to_string()));
    }

    Ok(())
}

fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config
        .name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.name
        )));
    }

    Ok(())
}

fn validate_upstream_config(config: &UpstreamConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }
    Ok(())
}

/// Validates competition entries
///
/// Codes become the first path segment, so they must be unique, URL-safe and
/// distinct from the paths taken by the rendered pages.
fn validate_competitions(competitions: &[CompetitionConfig]) -> Result<(), ConfigError> {
    if competitions.is_empty() {
        return Err(ConfigError::Validation(
            "at least one competition must be configured".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for competition in competitions {
        validate_code(&competition.code)?;

        if !seen.insert(competition.code.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate competition code '{}'",
                competition.code
            )));
        }

        if competition.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "competition '{}' must have a name",
                competition.code
            )));
        }

        validate_http_url(
            &format!("standings-url of '{}'", competition.code),
            &competition.standings_url,
        )?;

        if let Some(url) = &competition.topscorers_url {
            validate_http_url(&format!("topscorers-url of '{}'", competition.code), url)?;
        }
    }

    Ok(())
}

fn validate_code(code: &str) -> Result<(), ConfigError> {
    if code.is_empty() {
        return Err(ConfigError::Validation(
            "competition code cannot be empty".to_string(),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(ConfigError::Validation(format!(
            "competition code '{}' must be lowercase ASCII letters or digits",
            code
        )));
    }

    if VIEW_PAGES.iter().any(|page| page.path == code) {
        return Err(ConfigError::Validation(format!(
            "competition code '{}' collides with a page path",
            code
        )));
    }

    Ok(())
}

fn validate_http_url(what: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", what, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            what, value
        )));
    }

    Ok(())
}
