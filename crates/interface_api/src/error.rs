//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::TemporalError;
use domain_account::AccountError;

pub const CUSTOMER_NOT_FOUND: &str = "Customer not found!";
pub const CUSTOMER_ALREADY_EXISTS: &str = "Customer already exists!";
pub const INSUFFICIENT_FUNDS: &str = "Insufficient funds!";
pub const INVALID_DATE: &str = "Invalid date!";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// API error types
///
/// Client errors render as `400 {"error": "<message>"}` and callers tell
/// them apart by the message only. `Internal` renders as 500 with a fixed
/// message; the cause is logged, never sent.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", CUSTOMER_NOT_FOUND)]
    CustomerNotFound,

    #[error("{}", CUSTOMER_ALREADY_EXISTS)]
    CustomerAlreadyExists,

    #[error("{}", INSUFFICIENT_FUNDS)]
    InsufficientFunds,

    #[error("{}", INVALID_DATE)]
    InvalidDate,

    /// Request body missing, malformed or of the wrong shape
    #[error("{0}")]
    InvalidBody(String),

    #[error("{}", INTERNAL_ERROR)]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            error!(%cause, "Internal error");
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::CustomerNotFound(_) => ApiError::CustomerNotFound,
            AccountError::CustomerAlreadyExists(_) => ApiError::CustomerAlreadyExists,
            AccountError::InsufficientFunds { .. } => ApiError::InsufficientFunds,
            AccountError::BalanceOverflow => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<TemporalError> for ApiError {
    fn from(_: TemporalError) -> Self {
        ApiError::InvalidDate
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::TaxId;
    use rust_decimal::Decimal;

    #[test]
    fn test_domain_errors_map_to_client_errors() {
        let err: ApiError = AccountError::InsufficientFunds {
            balance: Decimal::ZERO,
            requested: Decimal::ONE,
        }
        .into();
        assert!(matches!(err, ApiError::InsufficientFunds));

        let err: ApiError = AccountError::CustomerNotFound(TaxId::from("1")).into();
        assert_eq!(err.to_string(), CUSTOMER_NOT_FOUND);
    }

    #[test]
    fn test_client_errors_are_bad_request() {
        let response = ApiError::CustomerAlreadyExists.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::InvalidDate.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::InvalidBody("missing field `amount`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_balance_overflow_is_internal() {
        let err: ApiError = AccountError::BalanceOverflow.into();

        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.to_string(), INTERNAL_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
