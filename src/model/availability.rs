use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailabilityDto {
    pub id: i32,
    pub coach_id: i32,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAvailabilityDto {
    pub coach_id: i32,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateAvailabilityDto {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}
