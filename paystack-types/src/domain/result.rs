//! Uniform outcome of a gateway call.

/// Result of one call to the payment gateway.
///
/// Success and failure share one shape so the HTTP layer can translate any
/// outcome the same way. A `status_code` of `0` means the request never got
/// an HTTP response (connection failure, timeout).
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResult {
    ok: bool,
    status_code: u16,
    message: String,
    data: Option<serde_json::Value>,
}

impl GatewayResult {
    pub const MISSING_API_KEY: &'static str = "Missing Paystack API key";

    /// A successful gateway response (always HTTP 200).
    pub fn success(message: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self {
            ok: true,
            status_code: 200,
            message: message.into(),
            data,
        }
    }

    /// A response the gateway answered but did not accept.
    pub fn rejected(
        status_code: u16,
        message: impl Into<String>,
        data: Option<serde_json::Value>,
    ) -> Self {
        Self {
            ok: false,
            status_code,
            message: message.into(),
            data,
        }
    }

    /// The request failed before an HTTP response was received.
    pub fn network_error(err: impl std::fmt::Display) -> Self {
        Self {
            ok: false,
            status_code: 0,
            message: format!("Network error: {err}"),
            data: None,
        }
    }

    /// No API key is configured; the gateway was not contacted.
    pub fn missing_api_key() -> Self {
        Self {
            ok: false,
            status_code: 401,
            message: Self::MISSING_API_KEY.to_string(),
            data: None,
        }
    }

    pub fn ok(&self) -> bool {
        self.ok
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }

    pub fn is_network_error(&self) -> bool {
        self.status_code == 0
    }

    /// Splits the result into its message and payload.
    pub fn into_parts(self) -> (String, Option<serde_json::Value>) {
        (self.message, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key() {
        let result = GatewayResult::missing_api_key();
        assert!(!result.ok());
        assert_eq!(result.status_code(), 401);
        assert_eq!(result.message(), "Missing Paystack API key");
        assert!(result.data().is_none());
    }

    #[test]
    fn test_network_error() {
        let result = GatewayResult::network_error("connection refused");
        assert!(result.is_network_error());
        assert_eq!(result.message(), "Network error: connection refused");
    }
}
