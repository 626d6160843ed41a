use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session. Results in 401 Unauthorized.
    #[error("Request made without an authenticated session")]
    UserNotInSession,

    /// The session references a user id that no longer exists, e.g. after an
    /// admin deleted the member. Results in 401 Unauthorized.
    #[error("User {0} from session no longer exists in the database")]
    UserNotInDatabase(i32),

    /// An authenticated non-admin attempted an admin-only operation.
    /// Results in 403 Forbidden.
    #[error("User {0} lacks admin permission: {1}")]
    AccessDenied(i32, String),

    /// Discord account is not on the member allow-list.
    #[error("Discord account {0} is not an approved guild member")]
    MembershipDenied(String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token
    /// stored in the session, indicating a potential CSRF attack or an invalid
    /// callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The OAuth authorization code could not be exchanged for a token.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For CSRF and token exchange failures
/// - 401 Unauthorized - For missing or stale sessions
/// - 403 Forbidden - For denied permissions and unapproved accounts
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Please log in first")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("Admin permission required")),
            )
                .into_response(),
            Self::MembershipDenied(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("This Discord account is not an approved member")),
            )
                .into_response(),
            Self::CsrfValidationFailed | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(
                    "There was an issue logging you in, please try again.",
                )),
            )
                .into_response(),
        }
    }
}
