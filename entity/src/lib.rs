//! SeaORM entities for the club database.
//!
//! One module per table. Each module exposes the canonical row shape (`Model`),
//! its `ActiveModel` for writes, and the relations that generate foreign keys.

pub mod prelude;

pub mod client;
pub mod coach_availability;
pub mod court;
pub mod lesson;
pub mod reservation;
pub mod team;
pub mod team_member;
pub mod user;
