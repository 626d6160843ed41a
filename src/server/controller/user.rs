use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ApiResponse,
        user::{ChangeGameIdRequest, ChangeJobRequest, SetupRequest},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::user::{current_user_dto, UserService},
        state::AppState,
    },
};

/// GET /api/user/current
/// Profile of the authenticated user.
pub async fn current(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(current_user_dto(&user)))))
}

/// POST /api/user/setup
/// First-time assignment of game ID and job.
pub async fn setup(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<SetupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .setup(user, req.game_id, req.job, &state.roster)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(current_user_dto(&user)))))
}

/// POST /api/user/change-job
pub async fn change_job(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<ChangeJobRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .change_job(user, req.job, &state.roster)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(current_user_dto(&user)))))
}

/// POST /api/user/change-id
pub async fn change_game_id(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<ChangeGameIdRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .change_game_id(user, req.game_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(current_user_dto(&user)))))
}
