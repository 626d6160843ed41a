use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ApiResponse, user::SubmitLeaveRequest},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::leave::LeaveService,
        state::AppState,
    },
};

/// POST /api/leave/submit
/// Files a leave entry for a date.
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<SubmitLeaveRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    LeaveService::new(&state.db).submit(&user, req.date).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ack())))
}
