//! Registration data repository for database operations.
//!
//! This module provides the `RegistrationRepository` for managing sign-up rows.
//! Uniqueness per (game_id, battle_id) is enforced by a storage-level unique index
//! in addition to the service's existence check.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::registration::CreateRegistrationParam;

#[cfg(test)]
mod test;

/// Repository providing database operations for battle sign-ups.
pub struct RegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationRepository<'a> {
    /// Creates a new RegistrationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RegistrationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a registration row.
    ///
    /// # Arguments
    /// - `param` - Registration fields assembled by the service
    ///
    /// # Returns
    /// - `Ok(Model)` - The created registration
    /// - `Err(DbErr)` - Database error, including the unique-index violation for
    ///   a duplicate (game_id, battle_id) pair
    pub async fn create(
        &self,
        param: CreateRegistrationParam,
    ) -> Result<entity::registration::Model, DbErr> {
        entity::registration::ActiveModel {
            game_id: ActiveValue::Set(param.game_id),
            battle_id: ActiveValue::Set(param.battle_id),
            job: ActiveValue::Set(param.job),
            is_proxy: ActiveValue::Set(param.is_proxy),
            proxy_by: ActiveValue::Set(param.proxy_by),
            proxy_reason: ActiveValue::Set(param.proxy_reason),
            is_alternate: ActiveValue::Set(param.is_alternate),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the registration for a (member, battle) pair.
    pub async fn find_by_pair(
        &self,
        game_id: &str,
        battle_id: i32,
    ) -> Result<Option<entity::registration::Model>, DbErr> {
        entity::prelude::Registration::find()
            .filter(entity::registration::Column::GameId.eq(game_id))
            .filter(entity::registration::Column::BattleId.eq(battle_id))
            .one(self.db)
            .await
    }

    /// Deletes the registration for a (member, battle) pair.
    ///
    /// # Returns
    /// - `Ok(true)` - A row existed and was deleted
    /// - `Ok(false)` - No matching registration
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_pair(&self, game_id: &str, battle_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Registration::delete_many()
            .filter(entity::registration::Column::GameId.eq(game_id))
            .filter(entity::registration::Column::BattleId.eq(battle_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists all registrations for a battle in sign-up order.
    pub async fn list_by_battle(
        &self,
        battle_id: i32,
    ) -> Result<Vec<entity::registration::Model>, DbErr> {
        entity::prelude::Registration::find()
            .filter(entity::registration::Column::BattleId.eq(battle_id))
            .order_by_asc(entity::registration::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Counts registrations for a battle.
    pub async fn count_by_battle(&self, battle_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Registration::find()
            .filter(entity::registration::Column::BattleId.eq(battle_id))
            .count(self.db)
            .await
    }

    /// Removes all registrations belonging to a member.
    ///
    /// Part of the member-delete cascade.
    pub async fn delete_by_game_id(&self, game_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Registration::delete_many()
            .filter(entity::registration::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
