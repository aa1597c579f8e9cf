use serde::Deserialize;
use std::env;

use koshyk_payment::PaymentMethod;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub log: LogConfig,
    pub carts: CartsConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
    #[serde(default)]
    pub perishables: Vec<ItemSpec>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Where error-and-above records are kept.
    pub file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CartsConfig {
    pub main: String,
    pub perishable: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PaymentConfig {
    /// Pinned payment method; when unset the driver asks interactively.
    pub method: Option<PaymentMethod>,
}

/// One shopping-list line: what to buy and how much of it.
#[derive(Debug, Deserialize, Clone)]
pub struct ItemSpec {
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    /// `dd.mm.yyyy`; present only for perishable goods.
    pub expires_on: Option<String>,
}

fn default_quantity() -> f64 {
    1.0
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of KOSHYK)
            .add_source(config::Environment::with_prefix("KOSHYK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
