//! OpenAPI document for the HTTP surface.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use paystack_types::dto::{ApiResponse, CallbackQuery, HealthResponse, PayRequest, ResponseStatus};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse,
         example = json!({"status": "ok", "paystack_api_key_configured": true}))
    )
)]
async fn health() {}

/// Initialize a Paystack transaction
#[utoipa::path(
    post,
    path = "/pay",
    tag = "payments",
    request_body = PayRequest,
    responses(
        (status = 200, description = "Transaction initialized; `data` carries the checkout URL", body = ApiResponse),
        (status = 400, description = "Validation failure or gateway rejection", body = ApiResponse,
         example = json!({"status": "error", "message": "email is required", "data": null})),
        (status = 401, description = "Paystack API key missing or rejected", body = ApiResponse)
    )
)]
async fn pay() {}

/// Verify a transaction by reference
#[utoipa::path(
    get,
    path = "/status/{reference}",
    tag = "payments",
    params(
        ("reference" = String, Path, description = "Paystack transaction reference")
    ),
    responses(
        (status = 200, description = "Verification payload from Paystack", body = ApiResponse),
        (status = 400, description = "Gateway rejection or network failure", body = ApiResponse),
        (status = 401, description = "Paystack API key missing or rejected", body = ApiResponse)
    )
)]
async fn status() {}

/// Checkout redirect target; verifies the returned reference
#[utoipa::path(
    get,
    path = "/callback",
    tag = "payments",
    params(CallbackQuery),
    responses(
        (status = 200, description = "Verification payload from Paystack", body = ApiResponse),
        (status = 400, description = "No reference supplied, or gateway rejection", body = ApiResponse),
        (status = 401, description = "Paystack API key missing or rejected", body = ApiResponse)
    )
)]
async fn callback() {}

/// OpenAPI documentation for the Paystack bridge.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Paystack Bridge API",
        version = "1.0.0",
        description = "Initializes and verifies Paystack transactions.\n\nAmounts are accepted in major units (e.g. `10.50`) and sent to Paystack in minor units (`1050`). Every payment endpoint answers with the envelope `{status, message, data}`.",
        license(name = "MIT"),
    ),
    paths(health, pay, status, callback),
    components(schemas(PayRequest, ApiResponse, ResponseStatus, HealthResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Transaction initialization and verification"),
    )
)]
pub struct ApiDoc;
