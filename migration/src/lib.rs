pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_client_table;
mod m20260301_000003_create_court_table;
mod m20260301_000004_create_reservation_table;
mod m20260302_000005_create_lesson_table;
mod m20260302_000006_create_coach_availability_table;
mod m20260303_000007_create_team_table;
mod m20260303_000008_create_team_member_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_client_table::Migration),
            Box::new(m20260301_000003_create_court_table::Migration),
            Box::new(m20260301_000004_create_reservation_table::Migration),
            Box::new(m20260302_000005_create_lesson_table::Migration),
            Box::new(m20260302_000006_create_coach_availability_table::Migration),
            Box::new(m20260303_000007_create_team_table::Migration),
            Box::new(m20260303_000008_create_team_member_table::Migration),
        ]
    }
}
