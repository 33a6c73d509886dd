use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::domain::errors::{BackendError, ContractError};

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub details: Option<serde_json::Value>,
}

/// API error types with corresponding HTTP status codes
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Contract(ContractError),
    Backend(BackendError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Contract(contract_error) => match contract_error {
                ContractError::Configuration(_) | ContractError::RpcError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                ContractError::UnsupportedChain(_) | ContractError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
                ContractError::Read { .. } => StatusCode::BAD_GATEWAY,
                ContractError::WalletNotConnected => StatusCode::UNAUTHORIZED,
                ContractError::Write { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            },
            ApiError::Backend(BackendError::UnsupportedChain(_)) => StatusCode::BAD_REQUEST,
            ApiError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Contract(contract_error) => match contract_error {
                ContractError::Configuration(_) => "CONFIGURATION_ERROR",
                ContractError::UnsupportedChain(_) => "UNSUPPORTED_CHAIN",
                ContractError::RpcError(_) => "RPC_ERROR",
                ContractError::Read { .. } => "CONTRACT_READ_ERROR",
                ContractError::WalletNotConnected => "WALLET_NOT_CONNECTED",
                ContractError::Write { .. } => "CONTRACT_WRITE_ERROR",
                ContractError::InvalidAddress(_) => "INVALID_ADDRESS",
            },
            ApiError::Backend(_) => "PROPOSAL_BACKEND_ERROR",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg.clone(),
            ApiError::Contract(contract_error) => contract_error.to_string(),
            ApiError::Backend(backend_error) => backend_error.to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self.message());
        } else {
            warn!("{}", self.message());
        }

        let details = match &self {
            ApiError::Contract(ContractError::Write { stage, .. }) => Some(serde_json::json!({ "stage": stage.to_string() })),
            ApiError::Backend(BackendError::Status { status, .. }) => {
                Some(serde_json::json!({ "backend_status": status }))
            }
            _ => None,
        };

        let error_response = ApiErrorResponse {
            success: false,
            error: self.message(),
            error_code: self.error_code().to_string(),
            details,
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<ContractError> for ApiError {
    fn from(error: ContractError) -> Self {
        ApiError::Contract(error)
    }
}

impl From<BackendError> for ApiError {
    fn from(error: BackendError) -> Self {
        ApiError::Backend(error)
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
