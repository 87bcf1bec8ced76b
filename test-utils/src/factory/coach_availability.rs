//! Coach availability factory.

use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating advertised coach availability windows.
pub struct CoachAvailabilityFactory<'a> {
    db: &'a DatabaseConnection,
    coach_id: i32,
    day: String,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl<'a> CoachAvailabilityFactory<'a> {
    /// Creates a new factory for a Monday 08:00-12:00 window.
    pub fn new(db: &'a DatabaseConnection, coach_id: i32) -> Self {
        Self {
            db,
            coach_id,
            day: "Monday".to_string(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        }
    }

    pub fn day(mut self, day: impl Into<String>) -> Self {
        self.day = day.into();
        self
    }

    pub async fn build(self) -> Result<entity::coach_availability::Model, DbErr> {
        entity::coach_availability::ActiveModel {
            coach_id: ActiveValue::Set(self.coach_id),
            day: ActiveValue::Set(self.day),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_availability(
    db: &DatabaseConnection,
    coach_id: i32,
) -> Result<entity::coach_availability::Model, DbErr> {
    CoachAvailabilityFactory::new(db, coach_id).build().await
}
