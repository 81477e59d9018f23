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
                    .table(Shift::Table)
                    .if_not_exists()
                    .col(pk_auto(Shift::Id))
                    .col(integer(Shift::AssignedId))
                    .col(integer_null(Shift::CovererId))
                    .col(timestamp(Shift::StartTime))
                    .col(integer(Shift::Status))
                    .col(boolean(Shift::Emergency).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shift_assigned_id")
                            .from(Shift::Table, Shift::AssignedId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shift_coverer_id")
                            .from(Shift::Table, Shift::CovererId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shift::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shift {
    Table,
    Id,
    AssignedId,
    CovererId,
    StartTime,
    Status,
    Emergency,
}
