//! Bot connection settings loaded from TOML and the environment.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use url::Url;

pub const TOKEN_ENV: &str = "TELEAPI_BOT_TOKEN";
pub const API_ENDPOINT_ENV: &str = "TELEAPI_API_ENDPOINT";

/// Method endpoint, `{token}` and `{method}` substituted.
pub const API_ENDPOINT: &str = "https://api.telegram.org/bot{token}/{method}";
pub use teleapi_types::FILE_ENDPOINT;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub token: Option<String>,
    /// Template with `{token}` and `{method}`, e.g. for a local Bot API server.
    pub api_endpoint: Option<String>,
    /// Template with `{token}` and `{path}`.
    pub file_endpoint: Option<String>,
    /// Whole-request timeout. Zero disables it.
    pub timeout_secs: u64,
}

impl BotConfig {
    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Config token, falling back to `TELEAPI_BOT_TOKEN`.
    pub fn resolve_token(&self) -> Result<String> {
        self.token_or(std::env::var(TOKEN_ENV).ok())
    }

    fn token_or(&self, env: Option<String>) -> Result<String> {
        let token = non_empty(self.token.as_deref())
            .or_else(|| non_empty(env.as_deref()))
            .unwrap_or_default();
        if token.is_empty() {
            bail!("token or {TOKEN_ENV} is required");
        }
        Ok(token)
    }

    /// `TELEAPI_API_ENDPOINT`, then the config value, then [`API_ENDPOINT`].
    pub fn resolve_api_endpoint(&self) -> Result<String> {
        self.api_endpoint_or(std::env::var(API_ENDPOINT_ENV).ok())
    }

    fn api_endpoint_or(&self, env: Option<String>) -> Result<String> {
        let endpoint = non_empty(env.as_deref())
            .or_else(|| non_empty(self.api_endpoint.as_deref()))
            .unwrap_or_else(|| API_ENDPOINT.to_string());
        validate_template(&endpoint, &[("{token}", "0:token"), ("{method}", "getMe")])?;
        Ok(endpoint)
    }

    pub fn resolve_file_endpoint(&self) -> Result<String> {
        let endpoint = non_empty(self.file_endpoint.as_deref())
            .unwrap_or_else(|| FILE_ENDPOINT.to_string());
        validate_template(&endpoint, &[("{token}", "0:token"), ("{path}", "photos/file.jpg")])?;
        Ok(endpoint)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn validate_template(template: &str, samples: &[(&str, &str)]) -> Result<()> {
    let sample = samples
        .iter()
        .fold(template.to_string(), |acc, (placeholder, value)| {
            acc.replace(placeholder, value)
        });
    let url = Url::parse(&sample).with_context(|| format!("Invalid endpoint: {template}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("Endpoint must use http or https: {template}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = BotConfig::load_from(&dir.path().join("bot.toml")).unwrap();
        assert_eq!(config, BotConfig::default());
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bot.toml");
        fs::write(&path, "token = \"123:abc\"\ntimeout_secs = 45\n").unwrap();

        let config = BotConfig::load_from(&path).unwrap();
        assert_eq!(config.token.as_deref(), Some("123:abc"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(45)));
        assert_eq!(config.api_endpoint, None);
    }

    #[test]
    fn test_load_invalid_toml_mentions_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bot.toml");
        fs::write(&path, "timeout_secs = \"soon\"").unwrap();

        let err = BotConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_token_precedence() {
        let config = BotConfig {
            token: Some("  from-config ".to_string()),
            ..BotConfig::default()
        };
        assert_eq!(config.token_or(Some("from-env".to_string())).unwrap(), "from-config");

        let config = BotConfig {
            token: Some("   ".to_string()),
            ..BotConfig::default()
        };
        assert_eq!(config.token_or(Some("from-env".to_string())).unwrap(), "from-env");
        assert!(config.token_or(None).is_err());
    }

    #[test]
    fn test_api_endpoint_precedence() {
        let config = BotConfig {
            api_endpoint: Some("http://localhost:8081/bot{token}/{method}".to_string()),
            ..BotConfig::default()
        };
        assert_eq!(
            config.api_endpoint_or(None).unwrap(),
            "http://localhost:8081/bot{token}/{method}"
        );
        assert_eq!(
            config
                .api_endpoint_or(Some("http://10.0.0.2/bot{token}/{method}".to_string()))
                .unwrap(),
            "http://10.0.0.2/bot{token}/{method}"
        );
        assert_eq!(BotConfig::default().api_endpoint_or(None).unwrap(), API_ENDPOINT);
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = BotConfig {
            api_endpoint: Some("not a url/{method}".to_string()),
            ..BotConfig::default()
        };
        assert!(config.api_endpoint_or(None).is_err());

        let config = BotConfig {
            file_endpoint: Some("ftp://files.example/{token}/{path}".to_string()),
            ..BotConfig::default()
        };
        assert!(config.resolve_file_endpoint().is_err());
    }
}
