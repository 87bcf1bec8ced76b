//! Database repository layer for all domain entities.
//!
//! One repository struct per entity. Repositories use SeaORM entity models internally and
//! return domain models. Each is generic over `ConnectionTrait`, so the same code runs
//! against the connection pool or inside a transaction opened by a service.

pub mod availability;
pub mod client;
pub mod court;
pub mod lesson;
pub mod reservation;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
