//! Lesson factory.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::test_date;

/// Factory for creating test lessons between an existing player and coach.
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: i32,
    coach_id: i32,
    lesson_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl<'a> LessonFactory<'a> {
    /// Creates a new LessonFactory for 09:00-10:00 on the test date.
    pub fn new(db: &'a DatabaseConnection, player_id: i32, coach_id: i32) -> Self {
        Self {
            db,
            player_id,
            coach_id,
            lesson_date: test_date(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        }
    }

    pub fn lesson_date(mut self, lesson_date: NaiveDate) -> Self {
        self.lesson_date = lesson_date;
        self
    }

    /// Sets the start and end of the lesson.
    pub fn times(mut self, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            player_id: ActiveValue::Set(self.player_id),
            coach_id: ActiveValue::Set(self.coach_id),
            lesson_date: ActiveValue::Set(self.lesson_date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_lesson(
    db: &DatabaseConnection,
    player_id: i32,
    coach_id: i32,
) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db, player_id, coach_id).build().await
}
