//! # API Error Type
//!
//! Unified error type for session commands, plus the startup error type.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Mini App                           │
//! │                                                                         │
//! │  Web view                    Rust session                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  {"cmd":"choose", ...}                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Core Error? ─── CoreError::FieldNotApplicable ── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"ok":false,"error":{"code":"NOT_APPLICABLE","message":"..."}}         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing size or temperature is NOT an error: those come back as a
//! regular response plus an alert on the host bridge.

use serde::Serialize;
use thiserror::Error;
use urban_core::CoreError;

/// API error returned from session commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product or cart line
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Choice for a field the product does not offer
    NotApplicable,

    /// Product is on the stop list
    Unavailable,

    /// Admin-only command outside admin mode
    Forbidden,

    /// Sheet command with no product open
    NoProductOpen,

    /// Command line could not be parsed
    BadCommand,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unavailable(product_id: u32) -> Self {
        ApiError::new(
            ErrorCode::Unavailable,
            format!("Product {} is temporarily unavailable", product_id),
        )
    }

    pub fn forbidden(action: &str) -> Self {
        ApiError::new(
            ErrorCode::Forbidden,
            format!("{} requires admin mode", action),
        )
    }

    pub fn no_product_open() -> Self {
        ApiError::new(ErrorCode::NoProductOpen, "No product is open")
    }

    pub fn bad_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id.to_string()),
            e @ CoreError::FieldNotApplicable { .. } => {
                ApiError::new(ErrorCode::NotApplicable, e.to_string())
            }
            e @ CoreError::UnknownSize { .. } => {
                ApiError::new(ErrorCode::NotApplicable, e.to_string())
            }
            e @ CoreError::InvalidProduct { .. } => ApiError::validation(e.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::Serialization(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Serialization failed: {}", e);
                ApiError::internal("Failed to encode payload")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Errors
// =============================================================================

/// Errors that stop the session from starting or running.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load catalog: {0}")]
    CatalogLoadFailed(#[source] CoreError),

    #[error("Invalid launch url: {0}")]
    InvalidLaunchUrl(#[source] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::ConfigLoadFailed(err.to_string())
    }
}

/// Convenience type alias for startup results.
pub type AppResult<T> = Result<T, AppError>;
