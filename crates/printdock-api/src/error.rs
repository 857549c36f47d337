//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Domain errors
//! (`AppError`, `StorageError`) convert into `HttpAppError` with `?` and render
//! consistently: status code, JSON body, and a log line at the variant's level.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use printdock_core::{AppError, ErrorMetadata, LogLevel};
use printdock_storage::StorageError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse. Required by the
/// orphan rule: IntoResponse is axum's, AppError lives in printdock-core.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::NotFound(name) => {
                AppError::NotFound(format!("File not found: {}", name))
            }
            StorageError::InvalidFilename(msg) => AppError::InvalidInput(msg),
            StorageError::WriteFailed(msg)
            | StorageError::ReadFailed(msg)
            | StorageError::DeleteFailed(msg) => AppError::Storage(msg),
            StorageError::Io(err) => AppError::Internal(format!("IO error: {}", err)),
            StorageError::Config(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Request failed");
        }
    }
}

fn is_production_env() -> bool {
    std::env::var("ENVIRONMENT")
        .map(|env| {
            let env = env.to_lowercase();
            env == "production" || env == "prod"
        })
        .unwrap_or(false)
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // Hide internals in production; otherwise show details only for
        // non-sensitive errors.
        let body = if is_production_env() || app_error.is_sensitive() {
            ErrorResponse {
                error: app_error.client_message(),
                code: app_error.error_code().to_string(),
                details: None,
                error_type: None,
            }
        } else {
            ErrorResponse {
                error: app_error.client_message(),
                code: app_error.error_code().to_string(),
                details: Some(app_error.detailed_message()),
                error_type: Some(app_error.error_type().to_string()),
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let HttpAppError(app) = StorageError::NotFound("abc.pdf".to_string()).into();
        match &app {
            AppError::NotFound(msg) => assert!(msg.contains("abc.pdf")),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(app.http_status_code(), 404);
    }

    #[test]
    fn test_storage_write_failure_maps_to_500() {
        let HttpAppError(app) = StorageError::WriteFailed("disk full".to_string()).into();
        match &app {
            AppError::Storage(msg) => assert_eq!(msg, "disk full"),
            other => panic!("expected Storage, got {:?}", other),
        }
        assert_eq!(app.http_status_code(), 500);
        // Cause text stays internal
        assert_eq!(app.client_message(), "Failed to save file");
    }

    #[test]
    fn test_invalid_filename_maps_to_400() {
        let HttpAppError(app) = StorageError::InvalidFilename("../x".to_string()).into();
        assert_eq!(app.http_status_code(), 400);
        assert_eq!(app.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse {
            error: "Printer not available".to_string(),
            code: "PRINTER_UNAVAILABLE".to_string(),
            details: None,
            error_type: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Printer not available");
        assert_eq!(json["code"], "PRINTER_UNAVAILABLE");
        assert!(json.get("details").is_none());
    }
}
