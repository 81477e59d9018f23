use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vacation::Table)
                    .if_not_exists()
                    .col(pk_auto(Vacation::Id))
                    .col(integer(Vacation::EmployeeId))
                    .col(date(Vacation::StartDate))
                    .col(date(Vacation::EndDate))
                    .col(integer(Vacation::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vacation_employee_id")
                            .from(Vacation::Table, Vacation::EmployeeId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vacation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vacation {
    Table,
    Id,
    EmployeeId,
    StartDate,
    EndDate,
    Status,
}
