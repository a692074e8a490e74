//! Payment Application Service
//!
//! Validates inbound requests and drives the gateway port.
//! Contains NO infrastructure logic - no HTTP, no environment lookups.

use paystack_types::{
    AppError, CallbackQuery, CurrencyCode, GatewayResult, InitializeTransaction, MajorAmount,
    PayRequest, PaymentGateway, ValidationError,
};

/// Request-independent settings, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct PaymentSettings {
    /// Currency used when a request does not name one.
    pub default_currency: CurrencyCode,
    /// Public base URL of this service; when set, checkout redirects to `{base}/callback`.
    pub public_base_url: Option<String>,
}

impl PaymentSettings {
    /// Callback URL derived from the public base URL, if one is configured.
    pub fn derived_callback_url(&self) -> Option<String> {
        self.public_base_url
            .as_deref()
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .map(|base| format!("{base}/callback"))
    }
}

/// Application service for payment operations.
///
/// Generic over `G: PaymentGateway` - the adapter is injected at compile time.
pub struct PaymentService<G: PaymentGateway> {
    gateway: G,
    settings: PaymentSettings,
}

impl<G: PaymentGateway> PaymentService<G> {
    /// Creates a new payment service with the given gateway.
    pub fn new(gateway: G, settings: PaymentSettings) -> Self {
        Self { gateway, settings }
    }

    /// Returns a reference to the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn settings(&self) -> &PaymentSettings {
        &self.settings
    }

    /// Whether the gateway has an API key to work with.
    pub fn api_key_configured(&self) -> bool {
        self.gateway.has_credentials()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────────

    /// Turns a raw `/pay` body into a typed gateway request.
    ///
    /// Checks run in a fixed order (email, then amount) so the first
    /// violation determines the message.
    pub fn prepare(&self, req: PayRequest) -> Result<InitializeTransaction, ValidationError> {
        let email = req
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(ValidationError::MissingEmail)?
            .to_string();

        let amount = MajorAmount::from_json(req.amount.as_ref())?;
        let currency = CurrencyCode::resolve(req.currency.as_deref(), &self.settings.default_currency);

        let callback_url = req
            .callback_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .or_else(|| self.settings.derived_callback_url());

        Ok(InitializeTransaction {
            email,
            amount,
            currency,
            callback_url,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Gateway Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Validates the request and initializes a transaction.
    pub async fn initiate(&self, req: PayRequest) -> Result<GatewayResult, AppError> {
        let transaction = self.prepare(req)?;
        tracing::debug!(
            amount = %transaction.amount,
            minor_units = transaction.amount.to_minor_units(),
            currency = %transaction.currency,
            "Initiating payment"
        );
        Ok(self.gateway.initialize(transaction).await)
    }

    /// Verifies a transaction by reference.
    ///
    /// The reference is forwarded as given; only an empty one is refused.
    pub async fn verify(&self, reference: &str) -> Result<GatewayResult, AppError> {
        if reference.is_empty() {
            return Err(ValidationError::MissingReference.into());
        }
        Ok(self.gateway.verify(reference).await)
    }

    /// Resolves the reference Paystack appended to the redirect and verifies it.
    pub async fn handle_callback(&self, query: &CallbackQuery) -> Result<GatewayResult, AppError> {
        let reference = query.reference().ok_or(ValidationError::MissingReference)?;
        self.verify(reference).await
    }
}
