use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::reservation::{
    slot_length, Reservation, ReservationFilter, ReservationSlotParams,
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation and returns it with its new id.
    pub async fn create(&self, params: ReservationSlotParams) -> Result<Reservation, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            client_phone: ActiveValue::Set(params.client_phone),
            court_id: ActiveValue::Set(params.court_id),
            start_time: ActiveValue::Set(params.start_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(reservation))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(reservation.map(Reservation::from_entity))
    }

    /// Overwrites client, court and start of an existing reservation, keeping its id.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(DbErr::RecordNotUpdated)` - No reservation with that id
    pub async fn update(
        &self,
        id: i32,
        params: ReservationSlotParams,
    ) -> Result<Reservation, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            id: ActiveValue::Unchanged(id),
            client_phone: ActiveValue::Set(params.client_phone),
            court_id: ActiveValue::Set(params.court_id),
            start_time: ActiveValue::Set(params.start_time),
        }
        .update(self.db)
        .await?;

        Ok(Reservation::from_entity(reservation))
    }

    /// Deletes a reservation, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds reservations on a court whose slot intersects `[start, end)`.
    ///
    /// A stored reservation R overlaps when `R.start < end` and `R.start + slot > start`,
    /// evaluated against the column as `R.start > start - slot`. Windows that only touch
    /// at a boundary do not overlap.
    ///
    /// # Arguments
    /// - `court_id` - Court to check; must exist
    /// - `start` - Inclusive start of the proposed window
    /// - `end` - Exclusive end of the proposed window, after `start`
    /// - `exclude_id` - Reservation to leave out, used when moving an existing booking
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - Conflicting reservations ordered by start, empty when free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_overlapping(
        &self,
        court_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_id: Option<i32>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CourtId.eq(court_id))
            .filter(entity::reservation::Column::StartTime.lt(end))
            .filter(entity::reservation::Column::StartTime.gt(start - slot_length()));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(exclude_id));
        }

        let reservations = query
            .order_by_asc(entity::reservation::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Lists reservations for the given filter.
    ///
    /// All and per-client listings are ordered latest start first; per-court listings
    /// earliest start first.
    pub async fn get_all(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>, DbErr> {
        let query = entity::prelude::Reservation::find();

        let query = match filter {
            ReservationFilter::All => {
                query.order_by_desc(entity::reservation::Column::StartTime)
            }
            ReservationFilter::Client(phone_number) => query
                .filter(entity::reservation::Column::ClientPhone.eq(phone_number.as_str()))
                .order_by_desc(entity::reservation::Column::StartTime),
            ReservationFilter::Court(court_id) => query
                .filter(entity::reservation::Column::CourtId.eq(*court_id))
                .order_by_asc(entity::reservation::Column::StartTime),
        };

        let reservations = query
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Counts reservations on a court.
    pub async fn count_for_court(&self, court_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CourtId.eq(court_id))
            .count(self.db)
            .await
    }
}
