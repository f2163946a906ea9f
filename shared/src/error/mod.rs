//! Unified error system for the member service
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by range
//! - [`AppError`]: Error type with code and message, renders itself as an HTTP response
//! - [`ErrorBody`]: The `{"error": "..."}` response body
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("email must be a valid email address");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody, GENERIC_ERROR_MESSAGE};
