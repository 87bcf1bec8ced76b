use crate::server::{data::lesson::LessonRepository, model::lesson::CreateLessonParams};
use chrono::NaiveTime;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::test_date, lesson::LessonFactory},
};

mod create;
mod get_by_coach;
mod is_booked;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}
