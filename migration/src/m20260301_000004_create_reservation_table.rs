use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_client_table::Client, m20260301_000003_create_court_table::Court,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(string(Reservation::ClientPhone))
                    .col(integer(Reservation::CourtId))
                    .col(timestamp(Reservation::StartTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_client_phone")
                            .from(Reservation::Table, Reservation::ClientPhone)
                            .to(Client::Table, Client::PhoneNumber)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_court_id")
                            .from(Reservation::Table, Reservation::CourtId)
                            .to(Court::Table, Court::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_court_start")
                    .table(Reservation::Table)
                    .col(Reservation::CourtId)
                    .col(Reservation::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    ClientPhone,
    CourtId,
    StartTime,
}
