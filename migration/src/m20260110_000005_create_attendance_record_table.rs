use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000002_create_battle_table::Battle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(AttendanceRecord::Id))
                    .col(string(AttendanceRecord::GameId))
                    .col(integer(AttendanceRecord::BattleId))
                    .col(boolean(AttendanceRecord::Attended))
                    .col(
                        timestamp(AttendanceRecord::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_record_battle_id")
                            .from(AttendanceRecord::Table, AttendanceRecord::BattleId)
                            .to(Battle::Table, Battle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One attendance outcome per member per battle. Confirm is a one-way
        // transition; this index backs that guard at the storage level.
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_game_battle")
                    .table(AttendanceRecord::Table)
                    .col(AttendanceRecord::GameId)
                    .col(AttendanceRecord::BattleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AttendanceRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AttendanceRecord {
    Table,
    Id,
    GameId,
    BattleId,
    Attended,
    CreatedAt,
}
