//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Reward issuance configuration.
    #[serde(default)]
    pub rewards: RewardsConfig,
    /// Initial data for the in-memory store.
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "rewards=info,rewarder=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

/// Reward issuance configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewardsConfig {
    /// Prefix prepended to every issued confirmation number.
    #[serde(default)]
    pub confirmation_prefix: String,
}

/// Seed data, kept as raw strings and parsed by the store that loads it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Accounts with their cards and beneficiaries.
    #[serde(default)]
    pub accounts: Vec<SeedAccount>,
    /// Restaurants with their benefit terms.
    #[serde(default)]
    pub restaurants: Vec<SeedRestaurant>,
}

/// A seeded account.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedAccount {
    /// Account number.
    pub number: String,
    /// Account holder name.
    pub name: String,
    /// Credit card numbers that map to this account.
    #[serde(default)]
    pub credit_cards: Vec<String>,
    /// Beneficiaries of this account.
    #[serde(default)]
    pub beneficiaries: Vec<SeedBeneficiary>,
}

/// A seeded beneficiary.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedBeneficiary {
    /// Beneficiary name, unique within the account.
    pub name: String,
    /// Allocation percentage such as `"50%"` or `"0.5"`.
    pub allocation_percentage: String,
    /// Savings balance such as `"0.00"`.
    #[serde(default = "default_savings")]
    pub savings: String,
}

fn default_savings() -> String {
    "0.00".to_string()
}

/// A seeded restaurant.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRestaurant {
    /// Merchant number.
    pub merchant_number: String,
    /// Restaurant name.
    pub name: String,
    /// Benefit percentage such as `"8%"`.
    pub benefit_percentage: String,
    /// Availability policy code: `"A"` (always) or `"N"` (never).
    #[serde(default = "default_availability_policy")]
    pub benefit_availability_policy: String,
}

fn default_availability_policy() -> String {
    "A".to_string()
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
            .add_source(config::Environment::with_prefix("REWARDS").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_toml(document: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_without_sources() {
        temp_env::with_vars_unset(["REWARDS__LOGGING__FILTER", "RUN_MODE"], || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.logging.filter, "rewards=info,rewarder=info");
            assert!(!config.logging.json);
            assert!(config.rewards.confirmation_prefix.is_empty());
            assert!(config.seed.accounts.is_empty());
        });
    }

    #[test]
    fn test_default_filters_cover_binary_target() {
        let shipped =
            AppConfig::from_toml(include_str!("../../../config/default.toml")).unwrap();
        for filter in [shipped.logging.filter, default_filter()] {
            let targets: Vec<&str> = filter.split(',').collect();
            assert!(targets.contains(&"rewards=info"));
            assert!(targets.contains(&"rewarder=info"));
        }
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("REWARDS__LOGGING__FILTER", Some("rewards=debug")),
                ("REWARDS__REWARDS__CONFIRMATION_PREFIX", Some("RC-")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.logging.filter, "rewards=debug");
                assert_eq!(config.rewards.confirmation_prefix, "RC-");
            },
        );
    }

    #[test]
    fn test_from_toml_seed() {
        let config = AppConfig::from_toml(
            r#"
            [[seed.accounts]]
            number = "123456789"
            name = "Keith and Keri Donald"
            credit_cards = ["1234123412341234"]

            [[seed.accounts.beneficiaries]]
            name = "Annabelle"
            allocation_percentage = "50%"

            [[seed.accounts.beneficiaries]]
            name = "Corgan"
            allocation_percentage = "50%"
            savings = "10.00"

            [[seed.restaurants]]
            merchant_number = "1234567890"
            name = "AppleBees"
            benefit_percentage = "8%"
            "#,
        )
        .unwrap();

        let account = &config.seed.accounts[0];
        assert_eq!(account.credit_cards, vec!["1234123412341234"]);
        assert_eq!(account.beneficiaries.len(), 2);
        assert_eq!(account.beneficiaries[0].savings, "0.00");
        assert_eq!(account.beneficiaries[1].savings, "10.00");

        let restaurant = &config.seed.restaurants[0];
        assert_eq!(restaurant.benefit_percentage, "8%");
        assert_eq!(restaurant.benefit_availability_policy, "A");
    }
}
