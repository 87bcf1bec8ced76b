//! Court reservation scheduling.
//!
//! Every create or update runs the same checks in order and stops at the first failure:
//! parse the requested start, resolve the client, resolve the court, look for overlapping
//! reservations on that court, then write. The existence checks, the overlap check and the
//! write share one transaction and run while holding the court's lock, so two requests for
//! the same court cannot both pass the overlap check.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{client::ClientRepository, court::CourtRepository, reservation::ReservationRepository},
    error::AppError,
    model::reservation::{
        slot_length, Reservation, ReservationFilter, ReservationRequest, ReservationSlotParams,
    },
    service::lock::KeyedLocks,
    util::parse::parse_instant,
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    court_locks: &'a KeyedLocks<i32>,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection, court_locks: &'a KeyedLocks<i32>) -> Self {
        Self { db, court_locks }
    }

    /// Books a court for one slot starting at the requested instant.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The stored reservation with its new id
    /// - `Err(AppError::BadRequest)` - Malformed start, checked before anything else
    /// - `Err(AppError::NotFound)` - Client or court does not exist
    /// - `Err(AppError::Conflict)` - The slot overlaps another reservation on the court
    pub async fn create(&self, request: ReservationRequest) -> Result<Reservation, AppError> {
        let (start, end) = slot_window(&request.start_time)?;

        let _court_guard = self.court_locks.acquire(request.court_id).await;
        let txn = self.db.begin().await?;

        let slot = resolve_slot(&txn, request, start, end, None).await?;
        let reservation = ReservationRepository::new(&txn).create(slot).await?;

        txn.commit().await?;

        tracing::info!(
            "Reserved court {} from {} for client {} (reservation {})",
            reservation.court_id,
            reservation.start_time,
            reservation.client_phone,
            reservation.id
        );

        Ok(reservation)
    }

    /// Moves an existing reservation to a new client, court or start, keeping its id.
    ///
    /// The reservation is resolved before the start is parsed. Its own current slot is
    /// excluded from the overlap check, so re-saving it unchanged succeeds.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(AppError::NotFound)` - Reservation, client or court does not exist
    /// - `Err(AppError::BadRequest)` - Malformed start
    /// - `Err(AppError::Conflict)` - The new slot overlaps another reservation
    pub async fn update(
        &self,
        id: i32,
        request: ReservationRequest,
    ) -> Result<Reservation, AppError> {
        let _court_guard = self.court_locks.acquire(request.court_id).await;
        let txn = self.db.begin().await?;

        if ReservationRepository::new(&txn).find_by_id(id).await?.is_none() {
            return Err(reservation_not_found(id));
        }

        let (start, end) = slot_window(&request.start_time)?;

        let slot = resolve_slot(&txn, request, start, end, Some(id)).await?;
        let reservation = ReservationRepository::new(&txn).update(id, slot).await?;

        txn.commit().await?;

        tracing::info!(
            "Moved reservation {} to court {} at {}",
            reservation.id,
            reservation.court_id,
            reservation.start_time
        );

        Ok(reservation)
    }

    /// Cancels a reservation.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No reservation with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = ReservationRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(reservation_not_found(id));
        }

        tracing::info!("Cancelled reservation {}", id);

        Ok(())
    }

    pub async fn get(&self, id: i32) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| reservation_not_found(id))
    }

    /// Lists reservations: all and per-client latest first, per-court earliest first.
    pub async fn list(&self, filter: ReservationFilter) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).get_all(&filter).await?)
    }
}

/// Parses the requested start and derives the exclusive end of its slot.
fn slot_window(value: &str) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let start = parse_instant(value)?;

    let out_of_range = || AppError::BadRequest(format!("Timestamp '{}' is out of range", value));
    let end = start
        .checked_add_signed(slot_length())
        .ok_or_else(out_of_range)?;
    start
        .checked_sub_signed(slot_length())
        .ok_or_else(out_of_range)?;

    Ok((start, end))
}

/// Checks the client, the court and the overlap for a slot inside `txn`.
async fn resolve_slot(
    txn: &DatabaseTransaction,
    request: ReservationRequest,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    exclude_id: Option<i32>,
) -> Result<ReservationSlotParams, AppError> {
    if ClientRepository::new(txn)
        .find_by_phone(&request.client_phone)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!(
            "Client {} not found",
            request.client_phone
        )));
    }

    if CourtRepository::new(txn)
        .find_by_id(request.court_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!(
            "Court {} not found",
            request.court_id
        )));
    }

    let conflicts = ReservationRepository::new(txn)
        .find_overlapping(request.court_id, start, end, exclude_id)
        .await?;

    if let Some(conflict) = conflicts.first() {
        tracing::debug!(
            "Slot {} on court {} overlaps reservation {}",
            start,
            request.court_id,
            conflict.id
        );
        return Err(AppError::Conflict(format!(
            "Court {} is already reserved from {} to {}",
            request.court_id,
            conflict.start_time,
            conflict.end_time()
        )));
    }

    Ok(ReservationSlotParams {
        client_phone: request.client_phone,
        court_id: request.court_id,
        start_time: start,
    })
}

fn reservation_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Reservation {} not found", id))
}
