//! Leave request factory for creating test leave entries.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test leave requests.
pub struct LeaveRequestFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: String,
    date: NaiveDate,
    status: String,
}

impl<'a> LeaveRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, game_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            db,
            game_id: game_id.into(),
            date,
            status: "pending".to_string(),
        }
    }

    /// Sets the request status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the leave request entity into the database.
    pub async fn build(self) -> Result<entity::leave_request::Model, DbErr> {
        entity::leave_request::ActiveModel {
            game_id: ActiveValue::Set(self.game_id),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending leave request for the given member and date.
pub async fn create_leave_request(
    db: &DatabaseConnection,
    game_id: &str,
    date: NaiveDate,
) -> Result<entity::leave_request::Model, DbErr> {
    LeaveRequestFactory::new(db, game_id, date).build().await
}
