use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeaveRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(LeaveRequest::Id))
                    .col(string(LeaveRequest::GameId))
                    .col(date(LeaveRequest::Date))
                    .col(string(LeaveRequest::Status).default("pending"))
                    .col(
                        timestamp(LeaveRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leave_request_game_date")
                    .table(LeaveRequest::Table)
                    .col(LeaveRequest::GameId)
                    .col(LeaveRequest::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaveRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeaveRequest {
    Table,
    Id,
    GameId,
    Date,
    Status,
    CreatedAt,
}
