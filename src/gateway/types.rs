//! API response envelope and error codes.
//!
//! - `ApiResponse<T>`: unified response wrapper
//! - `error_codes`: stable numeric code constants
//! - `ApiError`: exhaustive mapping from flow errors to HTTP outcomes

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use crate::tasks::service::TaskError;
use crate::user_auth::service::UserError;

/// Unified API response wrapper.
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Standard result type for handlers.
pub type ApiResult<T> =
    Result<(StatusCode, Json<ApiResponse<T>>), (StatusCode, Json<ApiResponse<()>>)>;

/// Success shorthand for handlers.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Validation errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INVALID_ID: i32 = 1002;

    // Auth errors (2xxx)
    pub const MISSING_AUTH: i32 = 2001;
    pub const MALFORMED_AUTH: i32 = 2002;
    pub const AUTH_FAILED: i32 = 2003;
    pub const FORBIDDEN: i32 = 2004;
    pub const INVALID_CREDENTIALS: i32 = 2005;

    // Resource / conflict errors (4xxx)
    pub const NOT_FOUND: i32 = 4001;
    pub const DUPLICATE_EMAIL: i32 = 4002;
    pub const ALREADY_ADMIN: i32 = 4003;
    pub const NO_EFFECTIVE_CHANGE: i32 = 4004;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// A fully resolved error outcome: status, envelope code and message.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    /// Convert into the handler error arm.
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err((
            self.status,
            Json(ApiResponse::<()>::error(self.code, self.msg)),
        ))
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        use error_codes::*;
        let (status, code) = match err {
            UserError::MissingFields => (StatusCode::BAD_REQUEST, INVALID_PARAMETER),
            UserError::DuplicateEmail => (StatusCode::BAD_REQUEST, DUPLICATE_EMAIL),
            // Invalid login credentials surface as a 500 with a domain
            // message; the flow never distinguishes unknown email from
            // wrong password.
            UserError::InvalidCredentials => (StatusCode::INTERNAL_SERVER_ERROR, INVALID_CREDENTIALS),
            UserError::Forbidden => (StatusCode::FORBIDDEN, FORBIDDEN),
            UserError::InvalidId => (StatusCode::BAD_REQUEST, INVALID_ID),
            UserError::NotFound => (StatusCode::BAD_REQUEST, NOT_FOUND),
            UserError::AlreadyAdmin => (StatusCode::BAD_REQUEST, ALREADY_ADMIN),
            UserError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR),
        };
        ApiError::new(status, code, err.to_string())
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        use error_codes::*;
        let (status, code) = match err {
            TaskError::MissingFields => (StatusCode::BAD_REQUEST, INVALID_PARAMETER),
            TaskError::Forbidden => (StatusCode::FORBIDDEN, FORBIDDEN),
            TaskError::InvalidId => (StatusCode::BAD_REQUEST, INVALID_ID),
            TaskError::NotFound => (StatusCode::BAD_REQUEST, NOT_FOUND),
            TaskError::NoEffectiveChange => (StatusCode::BAD_REQUEST, NO_EFFECTIVE_CHANGE),
            TaskError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR),
        };
        ApiError::new(status, code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(body["code"], 0);
        assert_eq!(body["msg"], "ok");
        assert_eq!(body["data"], 42);
    }

    #[test]
    fn error_envelope_omits_data() {
        let body =
            serde_json::to_value(ApiResponse::<()>::error(error_codes::NOT_FOUND, "gone")).unwrap();
        assert_eq!(body["code"], error_codes::NOT_FOUND);
        assert_eq!(body["msg"], "gone");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn forbidden_maps_to_403() {
        let err = ApiError::from(UserError::Forbidden);
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.code, error_codes::FORBIDDEN);

        let err = ApiError::from(TaskError::Forbidden);
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn conflicts_map_to_400() {
        for err in [
            ApiError::from(UserError::DuplicateEmail),
            ApiError::from(UserError::AlreadyAdmin),
            ApiError::from(UserError::NotFound),
            ApiError::from(TaskError::NotFound),
            ApiError::from(TaskError::NoEffectiveChange),
        ] {
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn internal_failures_map_to_500() {
        assert_eq!(
            ApiError::from(UserError::Internal).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(TaskError::Internal).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        // Invalid credentials keep the original surface's 500 contract.
        assert_eq!(
            ApiError::from(UserError::InvalidCredentials).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn already_admin_surfaces_domain_message() {
        let err = ApiError::from(UserError::AlreadyAdmin);
        assert_eq!(err.msg, "user is already an admin");
    }
}
