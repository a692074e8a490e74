//! # Paystack Bridge Client SDK
//!
//! A typed Rust client for the Paystack bridge API.

use paystack_types::{ApiResponse, HealthResponse, PayRequest};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// A payment to initialize.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub email: String,
    /// Amount in major units
    pub amount: Decimal,
    pub currency: Option<String>,
    pub callback_url: Option<String>,
}

impl From<&NewPayment> for PayRequest {
    fn from(p: &NewPayment) -> Self {
        PayRequest {
            email: Some(p.email.clone()),
            // Sent as a string so no precision is lost in transit.
            amount: Some(serde_json::Value::String(p.amount.to_string())),
            currency: p.currency.clone(),
            callback_url: p.callback_url.clone(),
        }
    }
}

/// Paystack bridge API client.
pub struct PaystackBridgeClient {
    base_url: String,
    http: Client,
}

impl PaystackBridgeClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Fetches the health report.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get("/health").await
    }

    /// Initializes a payment. On success `data` carries the checkout URL and reference.
    pub async fn pay(&self, payment: &NewPayment) -> Result<ApiResponse, ClientError> {
        let resp = self
            .http
            .post(format!("{}/pay", self.base_url))
            .json(&PayRequest::from(payment))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Verifies a transaction by reference.
    pub async fn status(&self, reference: &str) -> Result<ApiResponse, ClientError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["status", reference]);
        }
        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiResponse>(&body)
                .map(|envelope| envelope.message)
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
