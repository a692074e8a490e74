//! Currency codes sent to the gateway.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ISO-4217 style currency code, normalized to uppercase.
///
/// The bridge does not keep a list of supported currencies; Paystack
/// rejects the ones it does not accept for the merchant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Code used when neither the request nor the configuration names one.
    pub const DEFAULT: &'static str = "NGN";

    /// Normalizes a raw code. Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    /// Picks the requested code, falling back to `default` when it is absent or blank.
    pub fn resolve(requested: Option<&str>, default: &CurrencyCode) -> Self {
        requested
            .and_then(Self::new)
            .unwrap_or_else(|| default.clone())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
