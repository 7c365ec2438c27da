//! HTTP Error Handling
//!
//! 领域错误到状态码的映射:
//! - ValidationError -> 400
//! - NotFound        -> 404
//! - AlreadyExists   -> 409
//! - OperationFailed -> 500

use serde::Serialize;

use super::dto::{json_response, ApiGatewayResponse};
use crate::application::{ApplicationError, RepositoryError};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::MethodNotAllowed(_) => 405,
            ApiError::Conflict(_) => 409,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn into_response(self) -> ApiGatewayResponse {
        let status = self.status_code();
        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::MethodNotAllowed(msg)
            | ApiError::Conflict(msg)
            | ApiError::Internal(msg) => msg,
        };

        if status >= 500 {
            tracing::error!(status = status, error = %message, "Request failed");
        } else {
            tracing::warn!(status = status, error = %message, "Request rejected");
        }

        json_response(status, &ErrorBody { message })
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(msg) => ApiError::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => ApiError::Conflict(msg),
            RepositoryError::OperationFailed(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Validation(err) => ApiError::BadRequest(err.to_string()),
            ApplicationError::Repository(err) => err.into(),
        }
    }
}
