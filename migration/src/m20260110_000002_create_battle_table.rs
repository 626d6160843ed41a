use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Battle::Table)
                    .if_not_exists()
                    .col(pk_auto(Battle::Id))
                    .col(timestamp(Battle::Date))
                    .col(timestamp(Battle::Deadline))
                    .col(string(Battle::Status).default("open"))
                    .col(json(Battle::Groups))
                    .col(json_null(Battle::Formation))
                    .col(
                        timestamp(Battle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Partial unique index: at most one battle may be 'open' at a time.
        // Serializes concurrent battle-open at the storage level instead of
        // relying on the service's read-then-insert check.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX idx_battle_single_open ON battle (status) WHERE status = 'open'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Battle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Battle {
    Table,
    Id,
    Date,
    Deadline,
    Status,
    Groups,
    Formation,
    CreatedAt,
}
