use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::api::ApiResponse,
    server::{
        error::AppError, middleware::auth::AuthGuard, service::attendance::AttendanceService,
        state::AppState,
    },
};

/// GET /api/attendance/user
/// The authenticated member's attendance history and rate.
pub async fn user_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let summary = AttendanceService::new(&state.db).user_summary(&user).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(summary))))
}
