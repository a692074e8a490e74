//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use paystack_gateway::{ApiKey, GatewayConfig};
use paystack_hex::PaymentSettings;
use paystack_types::CurrencyCode;

/// Application configuration.
///
/// Read once at startup and handed to the components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_dir: PathBuf,
    /// OTLP collector endpoint; span export is disabled when unset.
    pub otlp_endpoint: Option<String>,
    pub gateway: GatewayConfig,
    pub payments: PaymentSettings,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port: u16 = var("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .trim()
            .parse()
            .context("PORT must be a valid port number")?;

        let timeout_secs: u64 = match var("PAYSTACK_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse()
                .context("PAYSTACK_TIMEOUT_SECS must be a whole number of seconds")?,
            None => GatewayConfig::DEFAULT_TIMEOUT.as_secs(),
        };

        let api_key = var("PAYSTACK_API_KEY").as_deref().and_then(ApiKey::new);
        let base_url =
            var("PAYSTACK_BASE_URL").unwrap_or_else(|| GatewayConfig::DEFAULT_BASE_URL.to_string());
        let gateway = GatewayConfig::new(api_key, base_url.trim())?
            .with_timeout(Duration::from_secs(timeout_secs));

        let default_currency = var("DEFAULT_CURRENCY")
            .as_deref()
            .and_then(CurrencyCode::new)
            .unwrap_or_default();

        let payments = PaymentSettings {
            default_currency,
            public_base_url: var("PUBLIC_BASE_URL").map(|v| v.trim().to_string()),
        };

        Ok(Self {
            port,
            log_dir: var("LOG_DIR").unwrap_or_else(|| "logs".to_string()).into(),
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
            gateway,
            payments,
        })
    }
}
