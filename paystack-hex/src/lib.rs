//! # Paystack Hex
//!
//! Application service layer and HTTP adapter for the Paystack bridge.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validation, callback URL derivation)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `G: PaymentGateway`, so the Paystack adapter
//! can be swapped for an in-memory fake in tests.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::{PaymentService, PaymentSettings};
