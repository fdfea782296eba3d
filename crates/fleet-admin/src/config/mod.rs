use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::drivers::DEFAULT_PAGE_SIZE;

/// Largest page an operator may configure for the driver listing.
pub const MAX_PAGE_SIZE: usize = 100;

/// Reason recorded when an admin rejects a driver without typing one.
pub const DEFAULT_REJECTION_REASON: &str = "Rejected by administrator";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the admin service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub drivers: DriverAdminConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let page_size = match env::var("DRIVERS_PAGE_SIZE") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
                .ok_or(ConfigError::InvalidPageSize { value: raw })?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let default_rejection_reason = match env::var("DRIVERS_DEFAULT_REJECTION_REASON") {
            Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyRejectionReason),
            Ok(raw) => raw.trim().to_string(),
            Err(_) => DEFAULT_REJECTION_REASON.to_string(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            drivers: DriverAdminConfig {
                page_size,
                default_rejection_reason,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Knobs for the driver listing and approval actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverAdminConfig {
    pub page_size: usize,
    pub default_rejection_reason: String,
}

impl Default for DriverAdminConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_rejection_reason: DEFAULT_REJECTION_REASON.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPageSize { value: String },
    EmptyRejectionReason,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPageSize { value } => write!(
                f,
                "DRIVERS_PAGE_SIZE must be between 1 and {MAX_PAGE_SIZE} (found '{value}')"
            ),
            ConfigError::EmptyRejectionReason => {
                write!(f, "DRIVERS_DEFAULT_REJECTION_REASON must not be blank")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidPageSize { .. }
            | ConfigError::EmptyRejectionReason => None,
        }
    }
}
