//! Leave ledger data repository.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for the per-user per-date leave ledger.
pub struct LeaveRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending leave entry for the given member and civil date.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created entry
    /// - `Err(DbErr)` - Database error, including the unique-index violation
    ///   when the member already filed leave for that date
    pub async fn create(
        &self,
        game_id: &str,
        date: NaiveDate,
    ) -> Result<entity::leave_request::Model, DbErr> {
        entity::leave_request::ActiveModel {
            game_id: ActiveValue::Set(game_id.to_string()),
            date: ActiveValue::Set(date),
            status: ActiveValue::Set("pending".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the leave entry for a (member, date) pair.
    pub async fn find_by_pair(
        &self,
        game_id: &str,
        date: NaiveDate,
    ) -> Result<Option<entity::leave_request::Model>, DbErr> {
        entity::prelude::LeaveRequest::find()
            .filter(entity::leave_request::Column::GameId.eq(game_id))
            .filter(entity::leave_request::Column::Date.eq(date))
            .one(self.db)
            .await
    }

    /// Whether the member has a non-rejected leave entry for the date.
    ///
    /// Pending entries block registration the same way approved ones do;
    /// only an explicit rejection clears the date again.
    pub async fn blocks_date(&self, game_id: &str, date: NaiveDate) -> Result<bool, DbErr> {
        let count = entity::prelude::LeaveRequest::find()
            .filter(entity::leave_request::Column::GameId.eq(game_id))
            .filter(entity::leave_request::Column::Date.eq(date))
            .filter(entity::leave_request::Column::Status.ne("rejected"))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes all leave entries belonging to a member.
    ///
    /// Part of the member-delete cascade.
    pub async fn delete_by_game_id(&self, game_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::LeaveRequest::delete_many()
            .filter(entity::leave_request::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
