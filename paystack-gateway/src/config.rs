//! Connection settings for the Paystack API.

use std::fmt;
use std::time::Duration;

use reqwest::Url;

/// Errors raised while building the gateway adapter.
#[derive(Debug, thiserror::Error)]
pub enum GatewayConfigError {
    #[error("invalid Paystack base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Paystack secret key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key. Blank input means "not configured".
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Settings for [`PaystackGateway`](crate::PaystackGateway).
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: Option<ApiKey>,
    pub base_url: Url,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.paystack.co";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

    /// Creates a config with the default timeout.
    ///
    /// `base_url` must be an absolute `http`/`https` URL; a trailing `/`
    /// is ignored.
    pub fn new(api_key: Option<ApiKey>, base_url: &str) -> Result<Self, GatewayConfigError> {
        let invalid = |reason: String| GatewayConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(invalid("expected an http(s) URL".into()));
        }
        Ok(Self {
            api_key,
            base_url: url,
            timeout: Self::DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins path segments onto the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
