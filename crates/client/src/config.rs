use std::time::Duration;

/// Compiled-in API root used when `API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";

/// Fixed per-request transport timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Delay before the single retry when a 429 carries no `retryAfter`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 5;

/// Longest server-requested 429 delay honored before falling back to the default.
pub const MAX_RETRY_AFTER_SECS: u64 = 60;

/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root including the version prefix, without a trailing slash.
    pub base_url: String,
    /// Transport timeout applied to every request.
    pub timeout: Duration,
    /// Fallback delay for the rate-limit retry.
    pub default_retry_after: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_retry_after: Duration::from_secs(DEFAULT_RETRY_AFTER_SECS),
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                          |
    /// |--------------------------------|----------------------------------|
    /// | `API_BASE_URL`                 | `http://localhost:5000/api/v1`   |
    /// | `API_TIMEOUT_SECS`             | `10`                             |
    /// | `RATE_LIMIT_DEFAULT_RETRY_SECS`| `5`                              |
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.into());

        let timeout_secs = env_secs("API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        let retry_secs = env_secs("RATE_LIMIT_DEFAULT_RETRY_SECS", DEFAULT_RETRY_AFTER_SECS);

        Self {
            timeout: Duration::from_secs(timeout_secs),
            default_retry_after: Duration::from_secs(retry_secs),
            ..Self::new(&base_url)
        }
    }

    /// Absolute URL for an API path such as `/trainers/42`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn env_secs(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var = name, value = %raw, default, "Ignoring invalid number");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("https://api.example.com/api/v1/");
        assert_eq!(config.base_url, "https://api.example.com/api/v1");
    }

    #[test]
    fn url_joins_paths() {
        let config = ClientConfig::new("https://api.example.com/api/v1");
        assert_eq!(
            config.url("/trainers/42"),
            "https://api.example.com/api/v1/trainers/42"
        );
        assert_eq!(config.url("faqs"), "https://api.example.com/api/v1/faqs");
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.default_retry_after, Duration::from_secs(5));
    }
}
