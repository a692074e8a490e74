//! # Paystack Types
//!
//! Domain types and port traits for the Paystack bridge.
//! This crate has ZERO IO dependencies - only data structures,
//! amount arithmetic, validation rules and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (MajorAmount, CurrencyCode, GatewayResult)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Validation and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CurrencyCode, GatewayResult, MajorAmount};
pub use dto::*;
pub use error::{AppError, ValidationError};
pub use ports::{InitializeTransaction, PaymentGateway};
