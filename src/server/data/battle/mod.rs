//! Battle data repository for database operations.
//!
//! This module provides the `BattleRepository` for managing battle records. Status
//! transitions are performed as compare-and-set updates so that two admins racing the
//! same transition cannot both succeed; opening relies additionally on the partial
//! unique index over `status = 'open'`.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::formation::Formation,
    server::{
        error::AppError,
        model::battle::{Battle, BattleStatus},
    },
};

#[cfg(test)]
mod test;

/// Repository providing database operations for battle management.
pub struct BattleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleRepository<'a> {
    /// Creates a new BattleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BattleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new battle in the `open` status.
    ///
    /// The partial unique index over `status = 'open'` makes a concurrent second
    /// open fail at the storage level even if both requests passed the service
    /// check; that failure surfaces as `DbErr` and is mapped to a conflict by
    /// the caller.
    ///
    /// # Arguments
    /// - `date` - When the battle takes place
    /// - `deadline` - Registration cutoff
    /// - `groups` - Group labels configured for this battle
    ///
    /// # Returns
    /// - `Ok(Battle)` - The created battle
    /// - `Err(AppError)` - Database error, including the unique-index violation
    pub async fn create(
        &self,
        date: DateTime<Utc>,
        deadline: DateTime<Utc>,
        groups: Vec<String>,
    ) -> Result<Battle, AppError> {
        let entity = entity::battle::ActiveModel {
            date: ActiveValue::Set(date),
            deadline: ActiveValue::Set(deadline),
            status: ActiveValue::Set(BattleStatus::Open.as_str().to_string()),
            groups: ActiveValue::Set(serde_json::json!(groups)),
            formation: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Battle::from_entity(entity)
    }

    /// Finds a battle by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Battle))` - Battle found
    /// - `Ok(None)` - No battle with that ID
    /// - `Err(AppError)` - Database error or malformed stored payload
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Battle>, AppError> {
        let entity = entity::prelude::Battle::find_by_id(id).one(self.db).await?;

        entity.map(Battle::from_entity).transpose()
    }

    /// Finds the battle currently open for registration, if any.
    ///
    /// The partial unique index guarantees at most one row matches.
    pub async fn find_open(&self) -> Result<Option<Battle>, AppError> {
        let entity = entity::prelude::Battle::find()
            .filter(entity::battle::Column::Status.eq(BattleStatus::Open.as_str()))
            .one(self.db)
            .await?;

        entity.map(Battle::from_entity).transpose()
    }

    /// Finds the battle currently being managed: the open one, or failing
    /// that the most recently created battle that has not been confirmed.
    ///
    /// Used by the request boundary to resolve the battle ID that is then
    /// threaded explicitly through every core operation.
    pub async fn find_current(&self) -> Result<Option<Battle>, AppError> {
        if let Some(open) = self.find_open().await? {
            return Ok(Some(open));
        }

        let entity = entity::prelude::Battle::find()
            .filter(entity::battle::Column::Status.ne(BattleStatus::Confirmed.as_str()))
            .order_by_desc(entity::battle::Column::CreatedAt)
            .one(self.db)
            .await?;

        entity.map(Battle::from_entity).transpose()
    }

    /// Loads the battles behind a set of IDs, keyed for join-style lookups.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Battle>, AppError> {
        let entities = entity::prelude::Battle::find()
            .filter(entity::battle::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        entities.into_iter().map(Battle::from_entity).collect()
    }

    /// Advances a battle's status with a compare-and-set update.
    ///
    /// The update only applies while the stored status still equals `from`,
    /// so concurrent admins cannot both perform the same transition.
    ///
    /// # Arguments
    /// - `id` - Battle ID
    /// - `from` - Status the battle must currently be in
    /// - `to` - Status to advance to
    ///
    /// # Returns
    /// - `Ok(true)` - The transition was applied
    /// - `Ok(false)` - The battle was no longer in `from` (lost race or stale view)
    /// - `Err(AppError)` - Database error
    pub async fn advance_status(
        &self,
        id: i32,
        from: BattleStatus,
        to: BattleStatus,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Battle::update_many()
            .col_expr(
                entity::battle::Column::Status,
                sea_orm::sea_query::Expr::value(to.as_str()),
            )
            .filter(entity::battle::Column::Id.eq(id))
            .filter(entity::battle::Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Replaces the battle's formation payload wholesale.
    pub async fn set_formation(&self, id: i32, formation: &Formation) -> Result<(), AppError> {
        let payload = serde_json::to_value(formation).map_err(|e| {
            AppError::InternalError(format!("Failed to serialize formation: {}", e))
        })?;

        entity::prelude::Battle::update_many()
            .col_expr(
                entity::battle::Column::Formation,
                sea_orm::sea_query::Expr::value(payload),
            )
            .filter(entity::battle::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
