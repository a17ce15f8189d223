//! TOML-based service configuration.

use std::fmt;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration parsed from TOML.
///
/// All fields have defaults; an absent file is equivalent to
/// [`AppConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Listener settings.
    pub server: ServerConfig,
    /// Persistence backend selection.
    pub database: DatabaseConfig,
    /// Tariff defaults applied to new calculations.
    pub tariff: TariffConfig,
}

/// Listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:3000`.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Persistence backend selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// MySQL connection URL; in-memory storage is used when absent.
    pub url: Option<String>,
    /// Connection acquisition timeout in seconds (must be > 0).
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            connect_timeout_secs: 30,
        }
    }
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Tariff defaults applied when a create request omits them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffConfig {
    /// Location label stamped on new calculations.
    pub location: String,
    /// Unit energy price (must be >= 0).
    pub cost_per_kwh: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            location: "Abuja".to_string(),
            cost_per_kwh: 225.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"tariff.cost_per_kwh"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl AppConfig {
    /// Parses configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.server.bind.parse::<SocketAddr>().is_err() {
            errors.push(ConfigError {
                field: "server.bind".into(),
                message: format!(
                    "must be a socket address like 0.0.0.0:3000, got \"{}\"",
                    self.server.bind
                ),
            });
        }
        if self.database.connect_timeout_secs == 0 {
            errors.push(ConfigError {
                field: "database.connect_timeout_secs".into(),
                message: "must be > 0".into(),
            });
        }
        if self.tariff.location.is_empty() {
            errors.push(ConfigError {
                field: "tariff.location".into(),
                message: "must not be empty".into(),
            });
        }
        if self.tariff.cost_per_kwh < 0.0 {
            errors.push(ConfigError {
                field: "tariff.cost_per_kwh".into(),
                message: "must be >= 0".into(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        let cfg = AppConfig::default();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "defaults should be valid: {errors:?}");
        assert_eq!(cfg.server.bind, "0.0.0.0:3000");
        assert_eq!(cfg.tariff.location, "Abuja");
        assert_eq!(cfg.tariff.cost_per_kwh, 225.0);
        assert!(cfg.database.url.is_none());
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[server]
bind = "127.0.0.1:8080"

[database]
url = "mysql://root@localhost/energy"
connect_timeout_secs = 5

[tariff]
location = "Lagos"
cost_per_kwh = 209.5
"#;
        let cfg = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:8080");
        assert_eq!(cfg.database.url.as_deref(), Some("mysql://root@localhost/energy"));
        assert_eq!(cfg.database.connect_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.tariff.location, "Lagos");
        assert_eq!(cfg.tariff.cost_per_kwh, 209.5);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[tariff]
cost_per_kwh = 66.0
"#;
        let cfg = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.tariff.cost_per_kwh, 66.0);
        // untouched sections keep defaults
        assert_eq!(cfg.tariff.location, "Abuja");
        assert_eq!(cfg.server.bind, "0.0.0.0:3000");
        assert_eq!(cfg.database.connect_timeout_secs, 30);
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[server]
bind = "0.0.0.0:3000"
bogus_field = true
"#;
        assert!(AppConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn validation_catches_bad_bind() {
        let mut cfg = AppConfig::default();
        cfg.server.bind = "not-an-address".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "server.bind"));
    }

    #[test]
    fn validation_catches_zero_timeout() {
        let mut cfg = AppConfig::default();
        cfg.database.connect_timeout_secs = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "database.connect_timeout_secs"));
    }

    #[test]
    fn validation_catches_negative_tariff() {
        let mut cfg = AppConfig::default();
        cfg.tariff.cost_per_kwh = -1.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "tariff.cost_per_kwh"));
    }
}
