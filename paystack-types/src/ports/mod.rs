//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not on the concrete
//! HTTP client that talks to Paystack.

mod gateway;

pub use gateway::{InitializeTransaction, PaymentGateway};
