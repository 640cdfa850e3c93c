use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use league_core::TransferError;
use log::error;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    Conflict(String),
    PaymentRequired(String),
    Gone(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            ApiError::Gone(_) => StatusCode::GONE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_message = match self {
            ApiError::NotFound(msg)
            | ApiError::InternalError(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Conflict(msg)
            | ApiError::PaymentRequired(msg)
            | ApiError::Gone(msg) => msg,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {}", error_message);
        }

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<TransferError> for ApiError {
    fn from(err: TransferError) -> Self {
        let message = err.to_string();

        match err {
            TransferError::AccessDenied(_) => ApiError::Forbidden(message),
            TransferError::InvalidState(_) => ApiError::Conflict(message),
            TransferError::InsufficientFunds { .. } => ApiError::PaymentRequired(message),
            TransferError::AssetNotOwned { .. } => ApiError::Conflict(message),
            TransferError::NegotiationExhausted => ApiError::Gone(message),
            TransferError::TransactionFailed(_) => ApiError::InternalError(message),
            TransferError::PlayerNotFound(_) | TransferError::TeamNotFound(_) => {
                ApiError::NotFound(message)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
