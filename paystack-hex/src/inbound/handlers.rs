//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use paystack_types::{
    ApiResponse, AppError, CallbackQuery, GatewayResult, HealthResponse, PayRequest,
    PaymentGateway,
};

use crate::PaymentService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<G: PaymentGateway> {
    pub service: PaymentService<G>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        tracing::debug!(%message, "Rejected request");

        (status, Json(ApiResponse::error(message))).into_response()
    }
}

/// HTTP status for a gateway outcome: 200 on success, 401 when the
/// gateway (or the missing key) said 401, otherwise 400.
pub fn gateway_status(result: &GatewayResult) -> StatusCode {
    match (result.ok(), result.status_code()) {
        (true, _) => StatusCode::OK,
        (false, 401) => StatusCode::UNAUTHORIZED,
        (false, _) => StatusCode::BAD_REQUEST,
    }
}

fn gateway_response(result: GatewayResult) -> Response {
    let status = gateway_status(&result);
    (status, Json(ApiResponse::from(result))).into_response()
}

/// Health check endpoint.
pub async fn health<G: PaymentGateway>(State(state): State<Arc<AppState<G>>>) -> impl IntoResponse {
    Json(HealthResponse::ok(state.service.api_key_configured()))
}

/// OpenAPI document for this service.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Initialize a payment.
///
/// The body is read as raw bytes so that a missing or malformed body is
/// validated like an empty object instead of being rejected by the extractor.
/// Fields are picked out individually; one mistyped field does not discard
/// the rest.
#[tracing::instrument(skip_all)]
pub async fn pay<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req = match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(value) => PayRequest::from_body(&value),
        Err(e) => {
            if !body.is_empty() {
                tracing::debug!(error = %e, "Unreadable /pay body, treating as empty");
            }
            PayRequest::default()
        }
    };

    let result = state.service.initiate(req).await?;
    Ok(gateway_response(result))
}

/// Verify a transaction by reference.
#[tracing::instrument(skip(state))]
pub async fn status<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    Path(reference): Path<String>,
) -> Result<Response, ApiError> {
    let result = state.service.verify(&reference).await?;
    Ok(gateway_response(result))
}

/// Landing endpoint for the Paystack checkout redirect.
#[tracing::instrument(skip(state))]
pub async fn callback<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, ApiError> {
    let result = state.service.handle_callback(&query).await?;
    Ok(gateway_response(result))
}
