//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand
//! that inserts a row with defaults. Factories never create parent rows on their own;
//! pass the ids of previously created clients, courts and users.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let client = factory::create_client(db).await?;
//! let court = factory::create_court(db).await?;
//! let reservation = factory::reservation::ReservationFactory::new(db, &client.phone_number, court.id)
//!     .start_time(start)
//!     .build()
//!     .await?;
//! ```

pub mod client;
pub mod coach_availability;
pub mod court;
pub mod helpers;
pub mod lesson;
pub mod reservation;
pub mod team;
pub mod user;

pub use client::create_client;
pub use coach_availability::create_availability;
pub use court::create_court;
pub use lesson::create_lesson;
pub use reservation::create_reservation;
pub use team::{add_team_member, create_team};
pub use user::{create_admin, create_coach, create_player, create_user};
