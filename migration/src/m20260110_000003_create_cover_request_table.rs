use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_user_table::User, m20260110_000002_create_shift_table::Shift,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoverRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(CoverRequest::Id))
                    .col(integer(CoverRequest::ShiftId))
                    .col(integer(CoverRequest::CovererId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cover_request_shift_id")
                            .from(CoverRequest::Table, CoverRequest::ShiftId)
                            .to(Shift::Table, Shift::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cover_request_coverer_id")
                            .from(CoverRequest::Table, CoverRequest::CovererId)
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
            .drop_table(Table::drop().table(CoverRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CoverRequest {
    Table,
    Id,
    ShiftId,
    CovererId,
}
