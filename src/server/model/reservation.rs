//! Court reservation domain models and parameters.
//!
//! A reservation occupies its court for the half-open window `[start_time, start_time + 1h)`.
//! Only the start is stored; the end is always derived from `slot_length()`.

use chrono::{DateTime, TimeDelta, Utc};

use crate::model::reservation::{ReservationDto, ReservationInputDto};

/// Minutes in one reservation slot.
pub const SLOT_MINUTES: i64 = 60;

/// Fixed length of every reservation.
pub fn slot_length() -> TimeDelta {
    TimeDelta::minutes(SLOT_MINUTES)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    /// Phone number of the booking client.
    pub client_phone: String,
    pub court_id: i32,
    pub start_time: DateTime<Utc>,
}

impl Reservation {
    /// Exclusive end of the reserved window.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + slot_length()
    }

    /// Whether this reservation's window intersects `[start, end)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && self.end_time() > start
    }

    pub fn into_dto(self) -> ReservationDto {
        let end_time = self.end_time();
        ReservationDto {
            id: self.id,
            client_phone: self.client_phone,
            court_id: self.court_id,
            start_time: self.start_time,
            end_time,
        }
    }

    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            client_phone: entity.client_phone,
            court_id: entity.court_id,
            start_time: entity.start_time,
        }
    }
}

/// Booking request as received from the client, with the start still unparsed.
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    pub client_phone: String,
    pub court_id: i32,
    pub start_time: String,
}

impl ReservationRequest {
    pub fn from_dto(dto: ReservationInputDto) -> Self {
        Self {
            client_phone: dto.client_phone.trim().to_string(),
            court_id: dto.court_id,
            start_time: dto.start_time,
        }
    }
}

/// Validated reservation fields written by the repository.
#[derive(Debug, Clone)]
pub struct ReservationSlotParams {
    pub client_phone: String,
    pub court_id: i32,
    pub start_time: DateTime<Utc>,
}

/// Which reservations to list.
#[derive(Debug, Clone, PartialEq)]
pub enum ReservationFilter {
    /// Every reservation, latest start first.
    All,
    /// Reservations of one client, latest start first.
    Client(String),
    /// Reservations on one court, earliest start first.
    Court(i32),
}
