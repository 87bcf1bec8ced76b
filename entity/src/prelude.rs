pub use super::client::Entity as Client;
pub use super::coach_availability::Entity as CoachAvailability;
pub use super::court::Entity as Court;
pub use super::lesson::Entity as Lesson;
pub use super::reservation::Entity as Reservation;
pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
pub use super::user::Entity as User;
