//! Domain models and operation parameters used between the service and data layers.

pub mod auth;
pub mod availability;
pub mod client;
pub mod court;
pub mod lesson;
pub mod reservation;
pub mod team;
pub mod user;
