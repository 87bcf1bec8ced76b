//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone.

use sea_orm::DatabaseConnection;

use crate::server::service::lock::KeyedLocks;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the SQLite database.
    pub db: DatabaseConnection,

    /// Serializes reservation conflict checks and inserts per court id.
    pub court_locks: KeyedLocks<i32>,

    /// Serializes lesson slot checks and inserts per coach id.
    pub coach_locks: KeyedLocks<i32>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            court_locks: KeyedLocks::default(),
            coach_locks: KeyedLocks::default(),
        }
    }
}
