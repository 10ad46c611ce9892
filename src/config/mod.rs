use crate::workflows::portfolio::SharePercentage;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub reporting: ReportingConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let management_share = match env::var("APP_MANAGEMENT_SHARE") {
            Ok(raw) => parse_share(&raw)?,
            Err(_) => SharePercentage::DEFAULT,
        };
        let currency = env::var("APP_CURRENCY").unwrap_or_else(|_| "SAR".to_string());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            reporting: ReportingConfig {
                management_share,
                currency,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Parses a management share such as `0.2`; values outside `[0, 1]` are rejected.
pub fn parse_share(raw: &str) -> Result<SharePercentage, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(SharePercentage::new)
        .ok_or_else(|| ConfigError::InvalidShare {
            value: raw.to_string(),
        })
}

/// Settings that shape the portfolio report.
#[derive(Debug, Clone)]
pub struct ReportingConfig {
    pub management_share: SharePercentage,
    pub currency: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidShare { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidShare { value } => write!(
                f,
                "APP_MANAGEMENT_SHARE must be a number between 0 and 1 (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
