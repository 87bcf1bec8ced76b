use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub client_phone: String,
    pub court_id: i32,
    pub start_time: DateTime<Utc>,
    /// Always one hour after `start_time`.
    pub end_time: DateTime<Utc>,
}

/// Body for creating or moving a reservation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationInputDto {
    pub client_phone: String,
    pub court_id: i32,
    /// RFC 3339 or `YYYY-MM-DDTHH:MM[:SS]` read as UTC.
    pub start_time: String,
}
