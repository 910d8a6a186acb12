//! # Demo Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read once at startup and never changes afterwards.

use storefront_core::Money;

/// Default log filter when neither `RUST_LOG` nor `STOREFRONT_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront=debug";

/// Settings for the demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Banner line printed before the scenario.
    pub store_name: String,

    /// Currency symbol for order totals.
    pub currency_symbol: String,

    /// Fallback tracing filter directive.
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            store_name: "Storefront Demo Store".to_string(),
            currency_symbol: "$".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DemoConfig {
    /// Creates a DemoConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOREFRONT_LOG`: Override fallback log filter
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DemoConfig::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(store_name) = get("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = get("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(filter) = get("STOREFRONT_LOG") {
            config.log_filter = filter;
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
