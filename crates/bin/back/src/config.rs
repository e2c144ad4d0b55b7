//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `clima-back.toml` in the working directory. Every field except
//! the weather API key has a sensible default so the file is optional.
//! Environment variables take precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Upstream provider locations and credentials.
    pub upstream: UpstreamConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Upstream provider configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the geocoding provider.
    pub viacep_url: String,
    /// Base URL of the weather provider.
    pub weather_api_url: String,
    /// API key for the weather provider. Required; startup fails without it.
    pub weather_api_key: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `clima-back.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// value fails validation — including a missing weather API key.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("clima-back.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CLIMA_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("CLIMA_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("CLIMA_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("CLIMA_VIACEP_URL") {
            self.upstream.viacep_url = val;
        }
        if let Ok(val) = std::env::var("CLIMA_WEATHER_API_URL") {
            self.upstream.weather_api_url = val;
        }
        if let Ok(val) = std::env::var("CLIMA_WEATHER_API_KEY") {
            self.upstream.weather_api_key = val;
        }
        if let Ok(val) = std::env::var("CLIMA_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.upstream.weather_api_key.is_empty() {
            return Err(ConfigError::Validation(
                "weather API key is required (set CLIMA_WEATHER_API_KEY)".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            viacep_url: "https://viacep.com.br".to_string(),
            weather_api_url: "http://api.weatherapi.com".to_string(),
            weather_api_key: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "clima_back=info,clima=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.upstream.viacep_url, "https://viacep.com.br");
        assert_eq!(config.upstream.weather_api_url, "http://api.weatherapi.com");
        assert!(config.upstream.weather_api_key.is_empty());
    }

    #[test]
    fn should_reject_missing_weather_api_key() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("weather API key")
        ));
    }

    #[test]
    fn should_accept_config_with_api_key() {
        let mut config = Config::default();
        config.upstream.weather_api_key = "secret".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9091

            [upstream]
            viacep_url = 'http://viacep.test'
            weather_api_url = 'http://weather.test'
            weather_api_key = 'secret'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9091);
        assert_eq!(config.upstream.viacep_url, "http://viacep.test");
        assert_eq!(config.upstream.weather_api_url, "http://weather.test");
        assert_eq!(config.upstream.weather_api_key, "secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [upstream]
            weather_api_key = 'secret'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.upstream.viacep_url, "https://viacep.com.br");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        config.upstream.weather_api_key = "secret".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8081");
    }
}
