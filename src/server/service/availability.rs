//! Coach availability windows.
//!
//! Windows are advertised only; lesson booking does not consult them.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{availability::AvailabilityRepository, user::UserRepository},
    error::AppError,
    model::{
        availability::{AvailabilityParams, AvailabilityRequest, CoachAvailability},
        user::Role,
    },
    util::parse::parse_time_range,
};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a new window for a coach.
    pub async fn add(
        &self,
        coach_id: i32,
        request: AvailabilityRequest,
    ) -> Result<CoachAvailability, AppError> {
        let params = to_params(coach_id, request)?;

        let coach = UserRepository::new(self.db).find_by_id(coach_id).await?;
        if !coach.is_some_and(|coach| coach.role == Role::Coach.as_str()) {
            return Err(AppError::NotFound(format!("Coach {} not found", coach_id)));
        }

        Ok(AvailabilityRepository::new(self.db).create(params).await?)
    }

    pub async fn get(&self, id: i32) -> Result<CoachAvailability, AppError> {
        AvailabilityRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| availability_not_found(id))
    }

    /// Lists a coach's windows by day then start.
    pub async fn list(&self, coach_id: i32) -> Result<Vec<CoachAvailability>, AppError> {
        Ok(AvailabilityRepository::new(self.db)
            .get_by_coach(coach_id)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        request: AvailabilityRequest,
    ) -> Result<CoachAvailability, AppError> {
        let existing = self.get(id).await?;
        let params = to_params(existing.coach_id, request)?;

        Ok(AvailabilityRepository::new(self.db)
            .update(id, params)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AvailabilityRepository::new(self.db).delete(id).await? {
            return Err(availability_not_found(id));
        }

        Ok(())
    }
}

/// Validates the day name and time range of a window request.
fn to_params(coach_id: i32, request: AvailabilityRequest) -> Result<AvailabilityParams, AppError> {
    let Some(day) = WEEKDAYS
        .iter()
        .find(|day| day.eq_ignore_ascii_case(&request.day))
    else {
        return Err(AppError::BadRequest(format!(
            "Invalid day '{}'",
            request.day
        )));
    };

    let (start_time, end_time) = parse_time_range(&request.start_time, &request.end_time)?;

    Ok(AvailabilityParams {
        coach_id,
        day: day.to_string(),
        start_time,
        end_time,
    })
}

fn availability_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Availability {} not found", id))
}
