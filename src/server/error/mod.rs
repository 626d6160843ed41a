//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, so API endpoints simply return `Result<_, AppError>`.
//!
//! Expected domain failures map to the specification's taxonomy: validation,
//! not-found, conflict, and policy errors each carry a short human-readable
//! message surfaced inside the uniform `{success: false, message}` envelope.
//! Unexpected infrastructure failures are logged in full and surfaced as a
//! generic internal error.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and
/// provides automatic conversion to HTTP responses. Domain failures use the
/// message-carrying variants; infrastructure errors use `#[from]` wrappers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping
    /// (401 Unauthorized, 403 Forbidden, etc.).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Malformed or missing input. Results in 400 Bad Request.
    #[error("{0}")]
    Validation(String),

    /// No matching battle, user, or registration. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// State conflict: duplicate registration, duplicate slot assignment,
    /// battle already open, or an out-of-order lifecycle transition.
    /// Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Action forbidden by roster policy, e.g. registering while on leave.
    /// Results in 422 Unprocessable Entity.
    #[error("{0}")]
    Policy(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to
    /// the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Expected failures keep their message; internal errors are logged with full
/// details but return a generic message to avoid information leakage. Every
/// body is the uniform `{success: false, message}` envelope.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Policy(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDto::new(msg))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the error message and returns a generic "Internal server error"
/// message to the client. Used as a fallback for errors without specific
/// HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
