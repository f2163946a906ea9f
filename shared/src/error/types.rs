//! Error types and the error response body

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned to clients for every system error
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Application error with a structured error code
///
/// The message is shown to clients for request-level errors (validation,
/// malformed input). For system errors it is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a member not found error
    pub fn member_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::MemberNotFound, format!("Member {id} not found"))
    }

    /// Create a required field error
    pub fn required(field: &str) -> Self {
        Self::with_message(ErrorCode::RequiredField, format!("{field} is required"))
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Message safe to send to the client
    pub fn public_message(&self) -> &str {
        if self.code.is_system() {
            GENERIC_ERROR_MESSAGE
        } else {
            &self.message
        }
    }
}

/// Flatten field-level validation errors into a single message.
///
/// Fields are reported in name order so the message is stable.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::validation(message)
    }
}

/// Error response body: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // Not found carries no body
        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }

        if self.code.is_system() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "Unhandled error"
            );
        }

        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use validator::Validate;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::MemberNotFound);
        assert_eq!(err.code, ErrorCode::MemberNotFound);
        assert_eq!(err.message, "Member not found");
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::member_not_found(7);
        assert_eq!(err.code, ErrorCode::MemberNotFound);
        assert_eq!(err.message, "Member 7 not found");

        let err = AppError::required("fullName");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "fullName is required");

        let err = AppError::database("Connection failed");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.to_string(), "Connection failed");
    }

    #[test]
    fn test_public_message_hides_system_detail() {
        let err = AppError::database("disk I/O error at page 42");
        assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);

        let err = AppError::validation("email must be a valid email address");
        assert_eq!(err.public_message(), "email must be a valid email address");
    }

    #[derive(Validate)]
    struct Signup {
        #[validate(length(max = 3, message = "name is too long"))]
        name: String,
        #[validate(email(message = "email is not valid"))]
        email: String,
    }

    #[test]
    fn test_from_validation_errors_joins_in_field_order() {
        let signup = Signup {
            name: "abcdef".into(),
            email: "nope".into(),
        };
        let err: AppError = signup.validate().unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "email is not valid; name is too long");
    }

    #[tokio::test]
    async fn test_into_response_shapes() {
        let resp = AppError::member_not_found(1).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());

        let resp = AppError::validation("bad email").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed, ErrorBody::new("bad email"));

        let resp = AppError::internal("boom").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed, ErrorBody::new(GENERIC_ERROR_MESSAGE));
    }
}
