//! Configuration management for gymdesk
//!
//! This module handles loading, validation, and management of
//! gymdesk configuration from YAML files.

pub mod error;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Monthly dues billing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Income category id used for membership dues
    #[serde(default = "default_dues_category")]
    pub dues_category: u32,
    /// Day of the month dues fall due (1-28)
    #[serde(default = "default_due_day")]
    pub due_day: u32,
    /// Monthly membership fee
    #[serde(default = "default_unit_amount")]
    pub unit_amount: Decimal,
    /// Behavior when dues for a member/month already exist
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            dues_category: default_dues_category(),
            due_day: default_due_day(),
            unit_amount: default_unit_amount(),
            on_duplicate: DuplicatePolicy::default(),
        }
    }
}

fn default_dues_category() -> u32 {
    1
}

fn default_due_day() -> u32 {
    10
}

fn default_unit_amount() -> Decimal {
    Decimal::new(12000, 2)
}

/// Policy for regenerating dues that already exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Skip members who already have dues for the target month
    Skip,
    /// Always create a new dues entry, even if one exists
    Allow,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Skip
    }
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(DuplicatePolicy::Skip),
            "allow" => Ok(DuplicatePolicy::Allow),
            _ => Err(format!("Invalid duplicate policy: {}", s)),
        }
    }
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicatePolicy::Skip => write!(f, "skip"),
            DuplicatePolicy::Allow => write!(f, "allow"),
        }
    }
}

/// Currency and number formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Currency symbol shown before amounts
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Thousands separator
    #[serde(default = "default_thousands_sep")]
    pub thousands_separator: String,
    /// Decimal separator
    #[serde(default = "default_decimal_sep")]
    pub decimal_separator: String,
    /// Number of decimal places
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            thousands_separator: default_thousands_sep(),
            decimal_separator: default_decimal_sep(),
            decimal_places: default_decimal_places(),
        }
    }
}

fn default_symbol() -> String {
    "R$".to_string()
}

fn default_thousands_sep() -> String {
    ".".to_string()
}

fn default_decimal_sep() -> String {
    ",".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Dues billing settings
    #[serde(default)]
    pub billing: BillingConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::IoError
            }
        })?;

        let config: Config =
            serde_yaml::from_str(&content).map_err(|_| ConfigError::InvalidYaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        // Capped at 28 so a due date exists in every month
        if self.billing.due_day < 1 || self.billing.due_day > 28 {
            return Err(ConfigError::InvalidValue {
                field: "billing.due_day".to_string(),
                reason: "Due day must be between 1 and 28".to_string(),
            });
        }

        if self.billing.unit_amount <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "billing.unit_amount".to_string(),
                reason: "Unit amount must be positive".to_string(),
            });
        }

        if self.currency.decimal_places > 10 {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 10".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.billing.dues_category, 1);
        assert_eq!(config.billing.due_day, 10);
        assert_eq!(config.billing.unit_amount, Decimal::new(12000, 2));
        assert_eq!(config.billing.on_duplicate, DuplicatePolicy::Skip);
        assert_eq!(config.currency.symbol, "R$");
        assert_eq!(config.currency.thousands_separator, ".");
        assert_eq!(config.currency.decimal_separator, ",");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = serde_yaml::from_str(Config::generate_default()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.billing.unit_amount, Decimal::new(12000, 2));
    }

    #[test]
    fn test_validate_rejects_bad_due_day() {
        let mut config = Config::default();
        config.billing.due_day = 31;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let mut config = Config::default();
        config.billing.unit_amount = Decimal::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_policy_from_str() {
        assert_eq!(
            "skip".parse::<DuplicatePolicy>().unwrap(),
            DuplicatePolicy::Skip
        );
        assert_eq!(
            "allow".parse::<DuplicatePolicy>().unwrap(),
            DuplicatePolicy::Allow
        );
        assert!("never".parse::<DuplicatePolicy>().is_err());
    }

    #[test]
    fn test_load_missing_file_is_file_not_found() {
        let err = Config::load(PathBuf::from("/nonexistent/gymdesk.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
        assert_eq!(err.code(), error::ConfigErrorCode::FileNotFound);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.billing.due_day, 10);
    }
}
