// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input/validation error (400)
    Validation,

    /// Domain invariant violation (422)
    DomainError,

    /// Dataset host unreachable or dataset unusable (502)
    ExternalService,

    /// File system error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::not_found("Resource"),

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Http(http_error) => {
                log::error!("HTTP error: {:?}", http_error);

                Self {
                    success: false,
                    error_type: ErrorType::ExternalService,
                    message: "Film data could not be fetched".to_string(),
                    details: Some(http_error.to_string()),
                }
            }

            AppError::DataUnavailable(reason) => Self {
                success: false,
                error_type: ErrorType::ExternalService,
                message: "Film data unavailable".to_string(),
                details: Some(reason),
            },

            AppError::InvalidUrl(url) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Invalid URL".to_string(),
                details: Some(url),
            },

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
    }

    #[test]
    fn test_invalid_url_is_validation() {
        let error = ErrorResponse::from_app_error(AppError::InvalidUrl("ftp://x".to_string()));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.details.as_deref(), Some("ftp://x"));
    }

    #[test]
    fn test_data_unavailable_is_external() {
        let error =
            ErrorResponse::from_app_error(AppError::DataUnavailable("HTTP 503".to_string()));
        assert_eq!(error.error_type, ErrorType::ExternalService);
        assert_eq!(error.details.as_deref(), Some("HTTP 503"));
    }

    #[test]
    fn test_domain_error_keeps_details() {
        let error = ErrorResponse::from_app_error(AppError::Domain(DomainError::InvalidLink(
            "bad".to_string(),
        )));
        assert_eq!(error.error_type, ErrorType::DomainError);
        assert!(error.details.unwrap().contains("bad"));
    }

    #[test]
    fn test_to_error_response_serializes() {
        let result: Result<(), AppError> = Err(AppError::InvalidUrl("nope".to_string()));
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("validation"));
        assert!(json.contains("nope"));
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::not_found("Film");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("not_found"));
        assert!(json.contains("Film not found"));
    }
}
