use std::path::Path;
use std::time::Duration;

use routesync_cc_client::UaaConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Environment variable that overrides `client_secret`
pub const CLIENT_SECRET_ENV: &str = "ROUTESYNC_CLIENT_SECRET";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Missing config value: {0}")]
    MissingField(&'static str),
    #[error("Invalid URL for {field}: {reason}")]
    InvalidUrl { field: &'static str, reason: String },
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Runner configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Cloud Controller API base url, e.g. `https://api.example.com`
    pub cloud_controller_url: String,
    /// UAA base url, e.g. `https://uaa.example.com`
    pub uaa_url: String,
    pub client_name: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Load runner configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunnerConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<RunnerConfig, ConfigError> {
    let config: RunnerConfig = serde_json::from_str(json)?;
    Ok(config)
}

impl RunnerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn uaa_config(&self) -> UaaConfig {
        UaaConfig::new(&self.uaa_url, &self.client_name, &self.client_secret)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup(CLIENT_SECRET_ENV) {
            self.client_secret = secret;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("cloud_controller_url", &self.cloud_controller_url)?;
        validate_url("uaa_url", &self.uaa_url)?;

        if self.client_name.is_empty() {
            return Err(ConfigError::MissingField("client_name"));
        }
        if self.client_secret.is_empty() {
            return Err(ConfigError::MissingField("client_secret"));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::MissingField(field));
    }

    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl {
            field,
            reason: format!("unsupported scheme {}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_JSON: &str = r#"{
        "cloud_controller_url": "https://api.example.com",
        "uaa_url": "https://uaa.example.com",
        "client_name": "routesync",
        "client_secret": "s3cret"
    }"#;

    #[test]
    fn test_load_config_from_str() {
        let config = load_config_from_str(CONFIG_JSON).unwrap();

        assert_eq!(config.cloud_controller_url, "https://api.example.com");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());

        let uaa = config.uaa_config();
        assert_eq!(uaa.uaa_url, "https://uaa.example.com");
        assert_eq!(uaa.client_name, "routesync");
    }

    #[test]
    fn test_secret_override() {
        let mut config = load_config_from_str(CONFIG_JSON).unwrap();
        config.apply_overrides(|key| {
            (key == CLIENT_SECRET_ENV).then(|| "from-env".to_string())
        });

        assert_eq!(config.client_secret, "from-env");
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let mut config = load_config_from_str(CONFIG_JSON).unwrap();
        config.client_secret.clear();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField("client_secret"))
        ));
    }

    #[test]
    fn test_bad_urls_are_rejected() {
        let mut config = load_config_from_str(CONFIG_JSON).unwrap();
        config.uaa_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { field: "uaa_url", .. })
        ));

        config.uaa_url = "ftp://uaa.example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { field: "uaa_url", .. })
        ));
    }

    #[test]
    fn test_zero_timeout_is_invalid_value() {
        let mut config = load_config_from_str(CONFIG_JSON).unwrap();
        config.request_timeout_secs = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "request_timeout_secs",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Invalid value for request_timeout_secs: must be greater than zero"
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = load_config_from_str("{").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
