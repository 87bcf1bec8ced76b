use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoachAvailability::Table)
                    .if_not_exists()
                    .col(pk_auto(CoachAvailability::Id))
                    .col(integer(CoachAvailability::CoachId))
                    .col(string(CoachAvailability::Day))
                    .col(time(CoachAvailability::StartTime))
                    .col(time(CoachAvailability::EndTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_coach_availability_coach_id")
                            .from(CoachAvailability::Table, CoachAvailability::CoachId)
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
            .drop_table(Table::drop().table(CoachAvailability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CoachAvailability {
    Table,
    Id,
    CoachId,
    Day,
    StartTime,
    EndTime,
}
