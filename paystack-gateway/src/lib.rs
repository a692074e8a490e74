//! # Paystack Gateway
//!
//! Outbound adapter that implements the `PaymentGateway` port against the
//! Paystack REST API.
//!
//! Every call is a single attempt bounded by the configured timeout, and
//! every outcome is returned as a `GatewayResult`: a missing API key
//! short-circuits with 401, transport failures report status 0, and gateway
//! responses are classified by [`response::classify`].

mod config;
pub mod response;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use paystack_types::{GatewayResult, InitializeTransaction, PaymentGateway};

pub use config::{ApiKey, GatewayConfig, GatewayConfigError};

const INITIALIZED: &str = "Payment initialized";
const VERIFIED: &str = "Verification successful";

/// JSON body of `POST /transaction/initialize`.
#[derive(Debug, Serialize)]
struct InitializeBody<'a> {
    email: &'a str,
    amount: i64,
    currency: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<&'a str>,
}

/// Paystack REST client.
#[derive(Debug, Clone)]
pub struct PaystackGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl PaystackGateway {
    /// Builds the adapter and its HTTP client.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Sends the request and classifies whatever comes back.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        default_message: &str,
    ) -> GatewayResult {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Network error calling Paystack");
                return GatewayResult::network_error(e);
            }
        };

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, status, "Failed to read Paystack response body");
                return GatewayResult::network_error(e);
            }
        };

        let result = response::classify(status, &content_type, text, default_message);
        if result.ok() {
            info!(message = %result.message(), "Paystack call succeeded");
        } else {
            warn!(code = status, message = %result.message(), "Paystack call failed");
        }
        result
    }
}

#[async_trait]
impl PaymentGateway for PaystackGateway {
    fn has_credentials(&self) -> bool {
        self.config.api_key.is_some()
    }

    #[instrument(skip(self, req), fields(currency = %req.currency))]
    async fn initialize(&self, req: InitializeTransaction) -> GatewayResult {
        let Some(api_key) = &self.config.api_key else {
            warn!("Attempted to initialize a transaction without an API key");
            return GatewayResult::missing_api_key();
        };

        let url = self.config.endpoint(&["transaction", "initialize"]);
        let body = InitializeBody {
            email: &req.email,
            amount: req.amount.to_minor_units(),
            currency: req.currency.as_str(),
            callback_url: req.callback_url.as_deref().filter(|u| !u.is_empty()),
        };
        info!(
            %url,
            email = body.email,
            amount = body.amount,
            currency = body.currency,
            callback_url = body.callback_url.is_some(),
            "POST transaction/initialize"
        );

        let request = self
            .client
            .post(url)
            .bearer_auth(api_key.expose())
            .json(&body);
        self.execute(request, INITIALIZED).await
    }

    #[instrument(skip(self))]
    async fn verify(&self, reference: &str) -> GatewayResult {
        let Some(api_key) = &self.config.api_key else {
            warn!("Attempted to verify a transaction without an API key");
            return GatewayResult::missing_api_key();
        };

        let url = self.config.endpoint(&["transaction", "verify", reference]);
        info!(%url, "GET transaction/verify");

        let request = self.client.get(url).bearer_auth(api_key.expose());
        self.execute(request, VERIFIED).await
    }
}
