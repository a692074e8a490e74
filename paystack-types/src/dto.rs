//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::GatewayResult;

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `POST /pay`.
///
/// Every field is optional on the wire; presence and format are checked by
/// the application service so each violation gets its own message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PayRequest {
    /// Customer email address
    #[schema(example = "customer@example.com")]
    pub email: Option<String>,
    /// Amount in major currency units, as a JSON number or numeric string
    #[schema(value_type = Option<String>, example = "10.50")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<serde_json::Value>,
    /// Currency code; the configured default is used when absent
    #[schema(example = "NGN")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Redirect target after checkout
    #[schema(example = "https://shop.example.com/callback")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl PayRequest {
    /// Reads a request out of an arbitrary JSON body, one field at a time.
    ///
    /// Text fields of the wrong JSON type count as absent, and a body that
    /// is not an object yields an empty request. `amount` is kept raw.
    pub fn from_body(body: &serde_json::Value) -> Self {
        let text = |key: &str| body.get(key).and_then(|v| v.as_str()).map(str::to_owned);
        Self {
            email: text("email"),
            amount: body.get("amount").cloned(),
            currency: text("currency"),
            callback_url: text("callback_url"),
        }
    }
}

/// Query string of `GET /callback`, as sent by Paystack after checkout.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackQuery {
    /// Transaction reference
    pub reference: Option<String>,
    /// Alternate name Paystack uses for the reference
    pub trxref: Option<String>,
}

impl CallbackQuery {
    /// The first non-empty of `reference` and `trxref`.
    pub fn reference(&self) -> Option<&str> {
        [&self.reference, &self.trxref]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .map(str::trim)
            .find(|v| !v.is_empty())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response envelope
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome marker of the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Uniform JSON body of every payment endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    #[schema(example = "Authorization URL created")]
    pub message: String,
    /// Gateway payload, passed through untouched
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    /// An error envelope without payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

impl From<GatewayResult> for ApiResponse {
    fn from(result: GatewayResult) -> Self {
        let status = if result.ok() {
            ResponseStatus::Success
        } else {
            ResponseStatus::Error
        };
        let (message, data) = result.into_parts();
        Self {
            status,
            message,
            data,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub paystack_api_key_configured: bool,
}

impl HealthResponse {
    pub fn ok(paystack_api_key_configured: bool) -> Self {
        Self {
            status: "ok".to_string(),
            paystack_api_key_configured,
        }
    }
}
