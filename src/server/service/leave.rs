//! Leave ledger operations.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, leave_request::LeaveRequestRepository},
    error::AppError,
    model::change_log::LogCategory,
    service::change_log::ChangeLogService,
};

pub struct LeaveService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a leave entry for the given civil date.
    ///
    /// One entry per member per date; filing again for the same date is a
    /// conflict. A non-rejected entry blocks registration for battles on that
    /// date.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created entry
    /// - `Err(AppError::Validation)` - Profile setup incomplete
    /// - `Err(AppError::Conflict)` - Leave already filed for that date
    pub async fn submit(
        &self,
        user: &entity::user::Model,
        date: NaiveDate,
    ) -> Result<entity::leave_request::Model, AppError> {
        let game_id = user.game_id.as_deref().ok_or_else(|| {
            AppError::Validation("Complete profile setup before filing leave".to_string())
        })?;

        let repo = LeaveRequestRepository::new(self.db);

        if repo.find_by_pair(game_id, date).await?.is_some() {
            return Err(AppError::Conflict(
                "Leave already filed for that date".to_string(),
            ));
        }

        let entry = repo.create(game_id, date).await.map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Conflict("Leave already filed for that date".to_string())
            } else {
                err.into()
            }
        })?;

        ChangeLogService::new(self.db)
            .append(
                game_id,
                format!("Filed leave for {}", date.format("%Y-%m-%d")),
                LogCategory::Leave,
            )
            .await;

        Ok(entry)
    }
}
