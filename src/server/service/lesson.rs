//! Private lesson booking.
//!
//! A coach holds at most one lesson per `(date, start_time)`. Only the start is compared:
//! a 9:30 lesson is accepted next to a 9:00-10:00 one.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{lesson::LessonRepository, user::UserRepository},
    error::AppError,
    middleware::auth::{authorize, Permission},
    model::{
        auth::Caller,
        lesson::{CreateLessonParams, Lesson, LessonRequest},
        user::Role,
    },
    service::lock::KeyedLocks,
    util::parse::{parse_date, parse_time_range},
};

pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
    coach_locks: &'a KeyedLocks<i32>,
}

impl<'a> LessonService<'a> {
    pub fn new(db: &'a DatabaseConnection, coach_locks: &'a KeyedLocks<i32>) -> Self {
        Self { db, coach_locks }
    }

    /// Books a lesson with a coach for the calling player.
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The stored lesson with its new id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is not a player
    /// - `Err(AppError::BadRequest)` - Malformed date or times, or start not before end
    /// - `Err(AppError::NotFound)` - No coach with that id
    /// - `Err(AppError::Conflict)` - The coach already has a lesson starting then
    pub async fn book(&self, caller: &Caller, request: LessonRequest) -> Result<Lesson, AppError> {
        authorize(caller, &[Permission::Player])?;
        let Some(player_id) = caller.user_id() else {
            return Err(AppError::InternalError(
                "Player permission granted to a caller without user id".to_string(),
            ));
        };

        let lesson_date = parse_date(&request.lesson_date)?;
        let (start_time, end_time) = parse_time_range(&request.start_time, &request.end_time)?;

        let _coach_guard = self.coach_locks.acquire(request.coach_id).await;
        let txn = self.db.begin().await?;

        let coach = UserRepository::new(&txn)
            .find_by_id(request.coach_id)
            .await?
            .filter(|user| user.role == Role::Coach.as_str());
        if coach.is_none() {
            return Err(AppError::NotFound(format!(
                "Coach {} not found",
                request.coach_id
            )));
        }

        let lesson_repo = LessonRepository::new(&txn);
        let slot_taken = format!(
            "Coach {} already has a lesson on {} at {}",
            request.coach_id, lesson_date, start_time
        );

        if lesson_repo
            .is_booked(request.coach_id, lesson_date, start_time)
            .await?
        {
            return Err(AppError::Conflict(slot_taken));
        }

        let lesson = lesson_repo
            .create(CreateLessonParams {
                player_id,
                coach_id: request.coach_id,
                lesson_date,
                start_time,
                end_time,
            })
            .await
            .map_err(|e| AppError::from_unique_violation(e, slot_taken))?;

        txn.commit().await?;

        tracing::info!(
            "Booked lesson {} with coach {} for player {} on {} at {}",
            lesson.id,
            lesson.coach_id,
            lesson.player_id,
            lesson.lesson_date,
            lesson.start_time
        );

        Ok(lesson)
    }

    /// Lists a player's lessons by date then start.
    pub async fn list_for_player(&self, player_id: i32) -> Result<Vec<Lesson>, AppError> {
        Ok(LessonRepository::new(self.db).get_by_player(player_id).await?)
    }

    /// Lists a coach's lessons by date then start.
    pub async fn list_for_coach(&self, coach_id: i32) -> Result<Vec<Lesson>, AppError> {
        Ok(LessonRepository::new(self.db).get_by_coach(coach_id).await?)
    }
}
