use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ApiResponse,
        member::{
            DeleteMemberRequest, MemberListDto, MemberListQuery, StatsDto, ToggleAdminRequest,
            ToggleLeaveRequest,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::member::MemberService,
        state::AppState,
    },
};

/// GET /api/members/list
/// Member directory, optionally filtered by job.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MemberListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let members = MemberService::new(&state.db)
        .list(query.job.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(MemberListDto { members })),
    ))
}

/// POST /api/members/toggle-leave
pub async fn toggle_leave(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<ToggleLeaveRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MemberService::new(&state.db)
        .toggle_leave(&user, &req.game_id, req.on_leave)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ack())))
}

/// POST /api/members/toggle-admin
pub async fn toggle_admin(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<ToggleAdminRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MemberService::new(&state.db)
        .toggle_admin(&user, &req.game_id, req.admin)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ack())))
}

/// POST /api/members/delete
/// Deletes a member and cascades their roster records.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<DeleteMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MemberService::new(&state.db)
        .delete(&user, &req.game_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ack())))
}

/// GET /api/stats
/// Headline numbers for the admin dashboard.
pub async fn stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stats = MemberService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(StatsDto { stats }))))
}
