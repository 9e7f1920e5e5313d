//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Leave quota defaults granted at onboarding.
    #[serde(default)]
    pub quotas: QuotaConfig,
}

/// Per-category leave quotas granted when a faculty member is onboarded.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaConfig {
    /// Medical leave days granted per year.
    #[serde(default = "default_medical_quota")]
    pub medical: Decimal,
    /// Casual leave days granted per year.
    #[serde(default = "default_casual_quota")]
    pub casual: Decimal,
    /// Earned leave days at onboarding (accrued through overwork).
    #[serde(default = "default_earned_quota")]
    pub earned: Decimal,
}

fn default_medical_quota() -> Decimal {
    Decimal::from(10)
}

fn default_casual_quota() -> Decimal {
    Decimal::from(10)
}

fn default_earned_quota() -> Decimal {
    Decimal::ZERO
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            medical: default_medical_quota(),
            casual: default_casual_quota(),
            earned: default_earned_quota(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FERMATA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
