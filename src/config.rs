//! Configuration module
//!
//! Settings live in a TOML file, by default
//! `<config_dir>/rentdesk/config.toml`. Every field has a default, so a
//! partial (or missing) file is fine.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::LatencySimulator;
use crate::domain::BusinessInfo;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::crypto::password::DEFAULT_HASH_COST;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config value {field}: {reason}")]
    OutOfRange {
        field: &'static str,
        reason: String,
    },
}

/// bcrypt accepts work factors 4 through 31
pub const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=31;
/// Tokens live at least an hour and at most a year
pub const JWT_EXPIRATION_HOURS_RANGE: RangeInclusive<i64> = 1..=24 * 366;

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rentdesk")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub latency: LatencyConfig,
    pub business: BusinessConfig,
    pub frontend: FrontendConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds allowed for in-flight requests after a shutdown signal
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    /// Let accounts without a stored password log in by email and role
    pub allow_passwordless_seed_login: bool,
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        let jwt = JwtConfig::default();
        Self {
            jwt_secret: jwt.secret,
            jwt_expiration_hours: jwt.expiration_hours,
            allow_passwordless_seed_login: true,
            bcrypt_cost: DEFAULT_HASH_COST,
        }
    }
}

impl SecurityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::OutOfRange {
                field: "security.bcrypt_cost",
                reason: format!(
                    "{} is outside {}..={}",
                    self.bcrypt_cost,
                    BCRYPT_COST_RANGE.start(),
                    BCRYPT_COST_RANGE.end()
                ),
            });
        }
        if !JWT_EXPIRATION_HOURS_RANGE.contains(&self.jwt_expiration_hours) {
            return Err(ConfigError::OutOfRange {
                field: "security.jwt_expiration_hours",
                reason: format!(
                    "{} is outside {}..={}",
                    self.jwt_expiration_hours,
                    JWT_EXPIRATION_HOURS_RANGE.start(),
                    JWT_EXPIRATION_HOURS_RANGE.end()
                ),
            });
        }
        Ok(())
    }

    pub fn jwt(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt_secret.clone(),
            expiration_hours: self.jwt_expiration_hours,
            ..JwtConfig::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_ms: 500,
            max_ms: 800,
        }
    }
}

impl LatencyConfig {
    pub fn simulator(&self) -> LatencySimulator {
        LatencySimulator::new(self.min_ms, self.max_ms)
    }
}

/// Contact details printed on receipts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl BusinessConfig {
    pub fn info(&self) -> Option<BusinessInfo> {
        let info = BusinessInfo {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        };
        (!info.is_empty()).then_some(info)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Build output of the single-page app
    pub dist_dir: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Parse and range-check a config document.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(raw)?;
        cfg.security.validate()?;
        Ok(cfg)
    }

    /// Write the config, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, raw).map_err(write_err)
    }
}
