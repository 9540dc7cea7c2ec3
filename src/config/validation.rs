use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// Checks the handful of values that would otherwise fail much later, at
/// request time: the user agent must be non-empty, the timeout nonzero,
/// and the search URL parseable and absolute.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.fetcher.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fetcher.user-agent must not be empty".to_string(),
        ));
    }

    if config.fetcher.request_timeout == 0 {
        return Err(ConfigError::Validation(
            "fetcher.request-timeout must be greater than zero".to_string(),
        ));
    }

    if config.fetcher.connect_timeout == 0 {
        return Err(ConfigError::Validation(
            "fetcher.connect-timeout must be greater than zero".to_string(),
        ));
    }

    let search_url = Url::parse(&config.search.url).map_err(|e| {
        ConfigError::Validation(format!("search.url is not a valid URL: {}", e))
    })?;
    if search_url.scheme() != "http" && search_url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "search.url must be http(s), got scheme '{}'",
            search_url.scheme()
        )));
    }

    if config.search.max_pages == 0 {
        return Err(ConfigError::Validation(
            "search.max-pages must be at least 1".to_string(),
        ));
    }

    if config.output.directory.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output.directory must not be empty".to_string(),
        ));
    }

    Ok(())
}
