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
                    .table(Lesson::Table)
                    .if_not_exists()
                    .col(pk_auto(Lesson::Id))
                    .col(integer(Lesson::PlayerId))
                    .col(integer(Lesson::CoachId))
                    .col(date(Lesson::LessonDate))
                    .col(time(Lesson::StartTime))
                    .col(time(Lesson::EndTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_player_id")
                            .from(Lesson::Table, Lesson::PlayerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_coach_id")
                            .from(Lesson::Table, Lesson::CoachId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A coach holds at most one lesson per (date, start) slot.
        manager
            .create_index(
                Index::create()
                    .name("idx_lesson_coach_slot")
                    .table(Lesson::Table)
                    .col(Lesson::CoachId)
                    .col(Lesson::LessonDate)
                    .col(Lesson::StartTime)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lesson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lesson {
    Table,
    Id,
    PlayerId,
    CoachId,
    LessonDate,
    StartTime,
    EndTime,
}
