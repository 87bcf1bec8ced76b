use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{court::CourtRepository, reservation::ReservationRepository},
    error::AppError,
    model::court::{Court, CreateCourtParams, UpdateCourtParams},
    service::lock::KeyedLocks,
};

pub struct CourtService<'a> {
    db: &'a DatabaseConnection,
    court_locks: &'a KeyedLocks<i32>,
}

impl<'a> CourtService<'a> {
    pub fn new(db: &'a DatabaseConnection, court_locks: &'a KeyedLocks<i32>) -> Self {
        Self { db, court_locks }
    }

    /// Adds a court with a unique name.
    pub async fn create(&self, params: CreateCourtParams) -> Result<Court, AppError> {
        validate_court(&params.name, &params.court_type)?;

        let repo = CourtRepository::new(self.db);
        let name_taken = format!("A court named '{}' already exists", params.name);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(name_taken));
        }

        let court = repo
            .create(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, name_taken))?;

        tracing::info!("Added court {} ({})", court.name, court.id);

        Ok(court)
    }

    pub async fn get(&self, id: i32) -> Result<Court, AppError> {
        CourtRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| court_not_found(id))
    }

    /// Lists courts ordered by name.
    pub async fn list(&self) -> Result<Vec<Court>, AppError> {
        Ok(CourtRepository::new(self.db).get_all().await?)
    }

    /// Renames or retypes a court. The new name must not belong to another court.
    pub async fn update(&self, params: UpdateCourtParams) -> Result<Court, AppError> {
        validate_court(&params.name, &params.court_type)?;

        let repo = CourtRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(court_not_found(params.id));
        }

        let name_taken = format!("A court named '{}' already exists", params.name);
        if let Some(existing) = repo.find_by_name(&params.name).await? {
            if existing.id != params.id {
                return Err(AppError::Conflict(name_taken));
            }
        }

        let court = repo
            .update(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, name_taken))?;

        Ok(court)
    }

    /// Removes a court that has no reservations.
    ///
    /// Holds the court's lock so no reservation can be booked on it while deleting.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No court with that id
    /// - `Err(AppError::Conflict)` - Reservations still reference the court
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let _court_guard = self.court_locks.acquire(id).await;
        let txn = self.db.begin().await?;

        let court_repo = CourtRepository::new(&txn);
        if court_repo.find_by_id(id).await?.is_none() {
            return Err(court_not_found(id));
        }

        let reservations = ReservationRepository::new(&txn).count_for_court(id).await?;
        if reservations > 0 {
            return Err(AppError::Conflict(format!(
                "Court {} still has {} reservation(s)",
                id, reservations
            )));
        }

        court_repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!("Removed court {}", id);

        Ok(())
    }
}

fn validate_court(name: &str, court_type: &str) -> Result<(), AppError> {
    if name.is_empty() || court_type.is_empty() {
        return Err(AppError::BadRequest(
            "Court name and type are required".to_string(),
        ));
    }
    Ok(())
}

fn court_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Court {} not found", id))
}
