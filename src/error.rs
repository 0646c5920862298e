//! Application error types and HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::models::ErrorResponse;

/// Application result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Protocol upload arrived without a file part
    #[error("no file uploaded (field \"files\")")]
    MissingUpload,

    /// Run creation arrived without a protocol identifier
    #[error("protocolId required")]
    MissingProtocolId,

    /// Multipart body could not be read
    #[error("invalid multipart body: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// Configuration loading or validation failed
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingUpload
            | AppError::MissingProtocolId
            | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::InvalidConfig(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_upload_maps_to_400() {
        let resp = AppError::MissingUpload.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_protocol_id_maps_to_400() {
        let resp = AppError::MissingProtocolId.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_messages_match_wire_format() {
        assert_eq!(
            AppError::MissingUpload.to_string(),
            "no file uploaded (field \"files\")"
        );
        assert_eq!(AppError::MissingProtocolId.to_string(), "protocolId required");
    }
}
