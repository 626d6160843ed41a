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
        change_log::{ChangeLogEntryDto, ChangeLogListDto, ChangeLogQuery},
    },
    server::{
        data::change_log::ChangeLogFilter,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::change_log::ChangeLogService,
        state::AppState,
    },
};

/// GET /api/change-logs
/// Queries the audit trail, newest first.
pub async fn query(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ChangeLogQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entries = ChangeLogService::new(&state.db)
        .query(ChangeLogFilter {
            date: query.date,
            actor: query.actor,
            category: query.category,
        })
        .await?;

    let logs = entries
        .into_iter()
        .map(|entry| ChangeLogEntryDto {
            actor: entry.actor,
            message: entry.message,
            category: entry.category,
            timestamp: entry.timestamp,
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(ChangeLogListDto { logs })),
    ))
}
