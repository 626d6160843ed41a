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
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(pk_auto(Registration::Id))
                    .col(string(Registration::GameId))
                    .col(integer(Registration::BattleId))
                    .col(string(Registration::Job))
                    .col(boolean(Registration::IsProxy).default(false))
                    .col(string_null(Registration::ProxyBy))
                    .col(string_null(Registration::ProxyReason))
                    .col(boolean(Registration::IsAlternate).default(false))
                    .col(
                        timestamp(Registration::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registration_battle_id")
                            .from(Registration::Table, Registration::BattleId)
                            .to(Battle::Table, Battle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One sign-up per member per battle.
        manager
            .create_index(
                Index::create()
                    .name("idx_registration_game_battle")
                    .table(Registration::Table)
                    .col(Registration::GameId)
                    .col(Registration::BattleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Registration {
    Table,
    Id,
    GameId,
    BattleId,
    Job,
    IsProxy,
    ProxyBy,
    ProxyReason,
    IsAlternate,
    CreatedAt,
}
