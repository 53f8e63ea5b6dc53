// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides one error format for the UI
// - Never exposes internal implementation details
// - Logs internal errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
    /// Rejected form input; nothing was stored
    Validation,

    /// Unknown movie id
    NotFound,

    /// Unreadable or malformed configuration
    Configuration,

    /// Anything else
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => Self::validation(domain_error.to_string()),

            AppError::NotFound => Self::not_found("Movie"),

            AppError::Config(message) => {
                log::error!("Configuration error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Configuration,
                    message: "Configuration could not be loaded".to_string(),
                    details: Some(message),
                }
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::Configuration,
                    message: "Configuration could not be loaded".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
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

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
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

    /// Serialized form handed back to the UI
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to a serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json())
    }
}
