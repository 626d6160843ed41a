use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChangeLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ChangeLog::Id))
                    .col(string(ChangeLog::Actor))
                    .col(text(ChangeLog::Message))
                    .col(string(ChangeLog::Category))
                    .col(
                        timestamp(ChangeLog::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_change_log_timestamp")
                    .table(ChangeLog::Table)
                    .col(ChangeLog::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChangeLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChangeLog {
    Table,
    Id,
    Actor,
    Message,
    Category,
    Timestamp,
}
