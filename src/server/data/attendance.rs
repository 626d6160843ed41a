//! Attendance record data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for attendance records.
///
/// Records are written once during battle confirmation and never mutated. The
/// unique (game_id, battle_id) index backs the once-only guarantee.
pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one attendance outcome.
    pub async fn create(
        &self,
        game_id: &str,
        battle_id: i32,
        attended: bool,
    ) -> Result<entity::attendance_record::Model, DbErr> {
        entity::attendance_record::ActiveModel {
            game_id: ActiveValue::Set(game_id.to_string()),
            battle_id: ActiveValue::Set(battle_id),
            attended: ActiveValue::Set(attended),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Whether an outcome already exists for the (member, battle) pair.
    pub async fn exists(&self, game_id: &str, battle_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::AttendanceRecord::find()
            .filter(entity::attendance_record::Column::GameId.eq(game_id))
            .filter(entity::attendance_record::Column::BattleId.eq(battle_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists a member's full attendance history, oldest first.
    pub async fn list_by_game_id(
        &self,
        game_id: &str,
    ) -> Result<Vec<entity::attendance_record::Model>, DbErr> {
        entity::prelude::AttendanceRecord::find()
            .filter(entity::attendance_record::Column::GameId.eq(game_id))
            .order_by_asc(entity::attendance_record::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Removes all attendance records belonging to a member.
    ///
    /// Part of the member-delete cascade.
    pub async fn delete_by_game_id(&self, game_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::AttendanceRecord::delete_many()
            .filter(entity::attendance_record::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
