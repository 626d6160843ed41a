//! Audit trail service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::change_log::{ChangeLogFilter, ChangeLogRepository},
    error::AppError,
    model::change_log::LogCategory,
};

/// The identifier an acting user is recorded under: their game ID once setup
/// is complete, their Discord display name before that.
pub fn actor_id(user: &entity::user::Model) -> &str {
    user.game_id.as_deref().unwrap_or(&user.name)
}

pub struct ChangeLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChangeLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one audit entry after the primary mutation has committed.
    ///
    /// The write is best-effort: a failure here is logged and swallowed so it
    /// never rolls back or masks the action the entry describes.
    ///
    /// # Arguments
    /// - `actor` - Identifier of the acting user (see [`actor_id`])
    /// - `message` - Human-readable description of the action
    /// - `category` - Category tag for later filtering
    pub async fn append(&self, actor: &str, message: String, category: LogCategory) {
        let repo = ChangeLogRepository::new(self.db);

        if let Err(err) = repo.append(actor, message, category).await {
            tracing::warn!("Failed to append change log entry: {}", err);
        }
    }

    /// Queries the audit trail, newest entries first.
    pub async fn query(
        &self,
        filter: ChangeLogFilter,
    ) -> Result<Vec<entity::change_log::Model>, AppError> {
        let repo = ChangeLogRepository::new(self.db);

        Ok(repo.query(filter).await?)
    }
}
