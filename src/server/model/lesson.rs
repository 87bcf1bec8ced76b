use chrono::{NaiveDate, NaiveTime};

use crate::model::lesson::{BookLessonDto, LessonDto};

/// A private lesson between a player and a coach.
///
/// A coach's lessons are keyed by `(lesson_date, start_time)`; lessons with different
/// starts may still overlap in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i32,
    pub player_id: i32,
    pub coach_id: i32,
    pub lesson_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl Lesson {
    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            id: self.id,
            player_id: self.player_id,
            coach_id: self.coach_id,
            lesson_date: self.lesson_date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }

    pub fn from_entity(entity: entity::lesson::Model) -> Self {
        Self {
            id: entity.id,
            player_id: entity.player_id,
            coach_id: entity.coach_id,
            lesson_date: entity.lesson_date,
            start_time: entity.start_time,
            end_time: entity.end_time,
        }
    }
}

/// Lesson request as received from the player, with date and times unparsed.
#[derive(Debug, Clone)]
pub struct LessonRequest {
    pub coach_id: i32,
    pub lesson_date: String,
    pub start_time: String,
    pub end_time: String,
}

impl LessonRequest {
    pub fn from_dto(dto: BookLessonDto) -> Self {
        Self {
            coach_id: dto.coach_id,
            lesson_date: dto.lesson_date,
            start_time: dto.start_time,
            end_time: dto.end_time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLessonParams {
    pub player_id: i32,
    pub coach_id: i32,
    pub lesson_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
