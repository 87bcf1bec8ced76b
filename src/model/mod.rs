//! JSON request and response bodies of the HTTP API.

pub mod api;
pub mod availability;
pub mod client;
pub mod court;
pub mod lesson;
pub mod reservation;
pub mod team;
pub mod user;
