//! Reservation factory.
//!
//! Inserts rows directly, bypassing the overlap check, so tests can arrange
//! any starting schedule.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::at;

/// Factory for creating test reservations.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    client_phone: String,
    court_id: i32,
    start_time: DateTime<Utc>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory starting at 10:00 on the test date.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `client_phone` - Phone number of an existing client
    /// - `court_id` - Id of an existing court
    pub fn new(db: &'a DatabaseConnection, client_phone: impl Into<String>, court_id: i32) -> Self {
        Self {
            db,
            client_phone: client_phone.into(),
            court_id,
            start_time: at(10, 0),
        }
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            client_phone: ActiveValue::Set(self.client_phone),
            court_id: ActiveValue::Set(self.court_id),
            start_time: ActiveValue::Set(self.start_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation at the given start instant.
pub async fn create_reservation(
    db: &DatabaseConnection,
    client_phone: &str,
    court_id: i32,
    start_time: DateTime<Utc>,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, client_phone, court_id)
        .start_time(start_time)
        .build()
        .await
}
