//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Billing thresholds and targets.
    #[serde(default)]
    pub billing: BillingConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Billing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Days past due before an overdue payment raises a notification.
    #[serde(default = "default_overdue_threshold_days")]
    pub overdue_threshold_days: i64,
    /// Days before an enrollment's end date at which it counts as expiring.
    #[serde(default = "default_expiring_window_days")]
    pub expiring_window_days: i64,
    /// Age above which an active client must have a medical certificate.
    #[serde(default = "default_medical_certificate_age")]
    pub medical_certificate_age: i32,
    /// Monthly revenue goal shown on the dashboard.
    #[serde(default = "default_monthly_goal")]
    pub monthly_goal: Decimal,
    /// ISO 4217 currency code used for display.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_overdue_threshold_days() -> i64 {
    5
}

fn default_expiring_window_days() -> i64 {
    15
}

fn default_medical_certificate_age() -> i32 {
    40
}

fn default_monthly_goal() -> Decimal {
    Decimal::from(50_000)
}

fn default_currency() -> String {
    "BRL".to_string()
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            overdue_threshold_days: default_overdue_threshold_days(),
            expiring_window_days: default_expiring_window_days(),
            medical_certificate_age: default_medical_certificate_age(),
            monthly_goal: default_monthly_goal(),
            currency: default_currency(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "gymdesk=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `GYMDESK__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("GYMDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
