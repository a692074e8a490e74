//! Error types for the Paystack bridge.

/// Request validation failures, detected before any gateway call.
///
/// The `Display` output is the exact message returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("email is required")]
    MissingEmail,

    #[error("amount is required")]
    MissingAmount,

    #[error("amount must be a number")]
    NonNumericAmount,

    #[error("amount must be > 0")]
    NonPositiveAmount,

    #[error("amount is too large")]
    AmountTooLarge,

    #[error("reference is required")]
    MissingReference,
}

/// Application-level errors (for HTTP responses).
///
/// Gateway rejections are not errors at this level: they travel as a
/// [`GatewayResult`](crate::GatewayResult) with `ok == false`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
