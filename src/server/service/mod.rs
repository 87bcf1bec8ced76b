//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer:
//!
//! - **Validation**: Parsing client-supplied times and rejecting malformed input
//! - **Orchestration**: Resolving referenced clients, courts and users before writing
//! - **Scheduling**: Reservation overlap and lesson slot checks inside one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod availability;
pub mod client;
pub mod court;
pub mod lesson;
pub mod lock;
pub mod password;
pub mod reservation;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
