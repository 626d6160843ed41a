use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ApiResponse,
        battle::CurrentBattleDto,
        formation::SaveFormationRequest,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::battle::Battle,
        service::{battle::BattleService, formation::FormationService},
        state::AppState,
    },
};

/// POST /api/formation/save
/// Validates and stores the formation for the battle being managed.
pub async fn save(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<SaveFormationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;
    let battle = resolve_current_battle(&state).await?;

    FormationService::new(&state.db)
        .save(&user, battle.id, req.formation, &state.roster)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ack())))
}

/// GET /api/formation/read
/// Formation view: full payload for admins, own slot for members.
pub async fn read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let battle = resolve_current_battle(&state).await?;

    let view = FormationService::new(&state.db).read(&user, battle.id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(view))))
}

/// POST /api/formation/publish
/// Publishes the closed battle's formation to members.
pub async fn publish(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;
    let battle = resolve_current_battle(&state).await?;

    let battle = BattleService::new(&state.db).publish(&user, battle.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(CurrentBattleDto {
            battle: Some(battle.into_dto()),
        })),
    ))
}

/// POST /api/formation/confirm
/// Confirms the published battle and records attendance.
pub async fn confirm(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;
    let battle = resolve_current_battle(&state).await?;

    let battle = BattleService::new(&state.db).confirm(&user, battle.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(CurrentBattleDto {
            battle: Some(battle.into_dto()),
        })),
    ))
}

/// Resolves the battle being managed (open, or latest unconfirmed) once;
/// formation operations then carry its ID explicitly.
async fn resolve_current_battle(state: &AppState) -> Result<Battle, AppError> {
    BattleService::new(&state.db)
        .current()
        .await?
        .ok_or_else(|| AppError::NotFound("No battle is being managed".to_string()))
}
