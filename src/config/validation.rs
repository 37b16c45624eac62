use crate::config::types::{ClientConfig, Config, RedirectPolicy};
use crate::ConfigError;

/// Upper bound on redirect hops when following
const MAX_REDIRECT_HOPS: usize = 20;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_client_config(&config.client)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.user_agent.chars().any(char::is_control) {
        return Err(ConfigError::Validation(format!(
            "user-agent must not contain control characters, got {:?}",
            config.user_agent
        )));
    }

    if config.timeout_ms < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-ms must be >= 1, got {}",
            config.timeout_ms
        )));
    }

    if config.connect_timeout_ms < 1 || config.connect_timeout_ms > config.timeout_ms {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-ms must be between 1 and timeout-ms ({}), got {}",
            config.timeout_ms, config.connect_timeout_ms
        )));
    }

    if config.redirect_policy == RedirectPolicy::Follow
        && (config.max_redirects < 1 || config.max_redirects > MAX_REDIRECT_HOPS)
    {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be between 1 and {} when following redirects, got {}",
            MAX_REDIRECT_HOPS, config.max_redirects
        )));
    }

    if config.max_body_bytes < 1 {
        return Err(ConfigError::Validation(format!(
            "max-body-bytes must be >= 1, got {}",
            config.max_body_bytes
        )));
    }

    Ok(())
}
