use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::lesson::{CreateLessonParams, Lesson};

pub struct LessonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LessonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateLessonParams) -> Result<Lesson, DbErr> {
        let lesson = entity::lesson::ActiveModel {
            player_id: ActiveValue::Set(params.player_id),
            coach_id: ActiveValue::Set(params.coach_id),
            lesson_date: ActiveValue::Set(params.lesson_date),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lesson::from_entity(lesson))
    }

    /// Whether the coach already has a lesson starting exactly at `start_time` on `lesson_date`.
    ///
    /// Only the start is compared; a lesson starting inside another one is not detected.
    pub async fn is_booked(
        &self,
        coach_id: i32,
        lesson_date: NaiveDate,
        start_time: NaiveTime,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::CoachId.eq(coach_id))
            .filter(entity::lesson::Column::LessonDate.eq(lesson_date))
            .filter(entity::lesson::Column::StartTime.eq(start_time))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists a player's lessons by date then start.
    pub async fn get_by_player(&self, player_id: i32) -> Result<Vec<Lesson>, DbErr> {
        self.get_filtered(Condition::all().add(entity::lesson::Column::PlayerId.eq(player_id)))
            .await
    }

    /// Lists a coach's lessons by date then start.
    pub async fn get_by_coach(&self, coach_id: i32) -> Result<Vec<Lesson>, DbErr> {
        self.get_filtered(Condition::all().add(entity::lesson::Column::CoachId.eq(coach_id)))
            .await
    }

    async fn get_filtered(&self, condition: Condition) -> Result<Vec<Lesson>, DbErr> {
        let lessons = entity::prelude::Lesson::find()
            .filter(condition)
            .order_by_asc(entity::lesson::Column::LessonDate)
            .order_by_asc(entity::lesson::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(lessons.into_iter().map(Lesson::from_entity).collect())
    }
}
