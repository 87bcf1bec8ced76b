use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LessonDto {
    pub id: i32,
    pub player_id: i32,
    pub coach_id: i32,
    pub lesson_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookLessonDto {
    pub coach_id: i32,
    /// `YYYY-MM-DD`
    pub lesson_date: String,
    /// `HH:MM[:SS]`
    pub start_time: String,
    /// `HH:MM[:SS]`
    pub end_time: String,
}
