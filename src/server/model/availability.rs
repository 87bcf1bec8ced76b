use chrono::NaiveTime;

use crate::model::availability::{AvailabilityDto, CreateAvailabilityDto, UpdateAvailabilityDto};

/// A weekly window a coach advertises as available.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachAvailability {
    pub id: i32,
    pub coach_id: i32,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl CoachAvailability {
    pub fn into_dto(self) -> AvailabilityDto {
        AvailabilityDto {
            id: self.id,
            coach_id: self.coach_id,
            day: self.day,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }

    pub fn from_entity(entity: entity::coach_availability::Model) -> Self {
        Self {
            id: entity.id,
            coach_id: entity.coach_id,
            day: entity.day,
            start_time: entity.start_time,
            end_time: entity.end_time,
        }
    }
}

/// Window request with times unparsed.
#[derive(Debug, Clone)]
pub struct AvailabilityRequest {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl AvailabilityRequest {
    pub fn from_create_dto(dto: CreateAvailabilityDto) -> (i32, Self) {
        (
            dto.coach_id,
            Self {
                day: dto.day.trim().to_string(),
                start_time: dto.start_time,
                end_time: dto.end_time,
            },
        )
    }

    pub fn from_update_dto(dto: UpdateAvailabilityDto) -> Self {
        Self {
            day: dto.day.trim().to_string(),
            start_time: dto.start_time,
            end_time: dto.end_time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AvailabilityParams {
    pub coach_id: i32,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
