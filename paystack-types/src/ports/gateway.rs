//! Payment gateway port trait.
//!
//! Implemented by the Paystack adapter, and by in-memory fakes in tests.

use crate::domain::{CurrencyCode, GatewayResult, MajorAmount};

/// Validated input for initializing a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializeTransaction {
    pub email: String,
    pub amount: MajorAmount,
    pub currency: CurrencyCode,
    /// Where the gateway redirects the customer; omitted from the request when `None`.
    pub callback_url: Option<String>,
}

/// The outbound port to the payment gateway.
///
/// Methods never return a Rust error: every outcome, including transport
/// failures and a missing credential, is a [`GatewayResult`]. Each call is
/// a single attempt.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Whether an API credential is configured.
    fn has_credentials(&self) -> bool;

    /// Initializes a transaction and returns the gateway's checkout payload.
    async fn initialize(&self, req: InitializeTransaction) -> GatewayResult;

    /// Looks up a transaction by its gateway reference.
    async fn verify(&self, reference: &str) -> GatewayResult;
}
