use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ApiResponse,
        battle::{CurrentBattleDto, OpenBattleRequest},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::battle::BattleService,
        state::AppState,
    },
};

/// POST /api/battle/open
/// Opens a new battle for registration.
pub async fn open(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<OpenBattleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let groups = req
        .groups
        .unwrap_or_else(|| state.roster.default_groups.clone());

    let battle = BattleService::new(&state.db)
        .open(&user, req.date, req.deadline, groups)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CurrentBattleDto {
            battle: Some(battle.into_dto()),
        })),
    ))
}

/// POST /api/battle/close
/// Closes the open battle for registration.
pub async fn close(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = BattleService::new(&state.db);
    let battle = service
        .open_battle()
        .await?
        .ok_or_else(|| AppError::NotFound("No battle is open".to_string()))?;

    let battle = service.close(&user, battle.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(CurrentBattleDto {
            battle: Some(battle.into_dto()),
        })),
    ))
}

/// GET /api/battle/current
/// The battle currently open or being managed, if any.
pub async fn current(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let battle = BattleService::new(&state.db).current().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(CurrentBattleDto {
            battle: battle.map(|b| b.into_dto()),
        })),
    ))
}
