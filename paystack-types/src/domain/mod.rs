//! Domain models for the Paystack bridge.

pub mod amount;
pub mod currency;
pub mod result;

pub use amount::{MajorAmount, checked_minor_units};
pub use currency::CurrencyCode;
pub use result::GatewayResult;
