use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ApiResponse,
        registration::{ProxyRegisterRequest, RegistrationListDto, RegistrationStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::battle::Battle,
        service::{battle::BattleService, registration::RegistrationService},
        state::AppState,
    },
};

/// POST /api/registration/register
/// Signs the authenticated member up for the open battle.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let battle = resolve_open_battle(&state).await?;

    let registration = RegistrationService::new(&state.db)
        .register(&user, battle.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RegistrationStatusDto {
            registered: true,
            is_alternate: Some(registration.is_alternate),
        })),
    ))
}

/// POST /api/registration/cancel
/// Cancels the member's sign-up for the open battle.
pub async fn cancel(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let battle = resolve_open_battle(&state).await?;

    RegistrationService::new(&state.db)
        .cancel(&user, battle.id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ack())))
}

/// POST /api/registration/proxy
/// Signs another member up on their behalf.
pub async fn proxy(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<ProxyRegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let battle = resolve_open_battle(&state).await?;

    let registration = RegistrationService::new(&state.db)
        .proxy_register(&user, &req.target_id, battle.id, &req.reason, &state.roster)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RegistrationStatusDto {
            registered: true,
            is_alternate: Some(registration.is_alternate),
        })),
    ))
}

/// GET /api/registration/status
/// Whether the member is signed up for the open battle.
pub async fn status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let battle = resolve_open_battle(&state).await?;

    let registration = RegistrationService::new(&state.db)
        .status(&user, battle.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(RegistrationStatusDto {
            registered: registration.is_some(),
            is_alternate: registration.map(|r| r.is_alternate),
        })),
    ))
}

/// GET /api/registration/list
/// All sign-ups for the open battle, for the admin roster view.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;
    let battle = resolve_open_battle(&state).await?;

    let players = RegistrationService::new(&state.db).list(battle.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(RegistrationListDto { players })),
    ))
}

/// Resolves the open battle once; registration operations then carry its ID
/// explicitly.
async fn resolve_open_battle(state: &AppState) -> Result<Battle, AppError> {
    BattleService::new(&state.db)
        .open_battle()
        .await?
        .ok_or_else(|| AppError::NotFound("No battle is open for registration".to_string()))
}
