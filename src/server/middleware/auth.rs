//! Access control for API operations.
//!
//! `Permission` is a pure predicate over the authenticated `Caller`. `AuthGuard` resolves
//! the caller from the session and checks a list of permissions, all of which must hold.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{client::ClientRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{
        auth::Caller,
        user::{Role, User},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum Permission {
    /// User with the admin role.
    Admin,
    /// Admin or booking manager.
    ManageBookings,
    /// The coach with this user id.
    Coach(i32),
    /// Any user with the player role.
    Player,
    /// The client with this phone number, or a user holding `ManageBookings`.
    ClientOrStaff(String),
}

impl Permission {
    pub fn is_granted(&self, caller: &Caller) -> bool {
        match self {
            Self::Admin => caller.role() == Some(Role::Admin),
            Self::ManageBookings => {
                matches!(caller.role(), Some(Role::Admin | Role::BookingManager))
            }
            Self::Coach(coach_id) => match caller {
                Caller::User(user) => user.role == Role::Coach && user.id == *coach_id,
                Caller::Client(_) => false,
            },
            Self::Player => caller.role() == Some(Role::Player),
            Self::ClientOrStaff(phone_number) => {
                caller.client_phone() == Some(phone_number.as_str())
                    || Self::ManageBookings.is_granted(caller)
            }
        }
    }

    fn requirement(&self) -> String {
        match self {
            Self::Admin => "admin role required".to_string(),
            Self::ManageBookings => "admin or booking_manager role required".to_string(),
            Self::Coach(coach_id) => format!("must be coach {}", coach_id),
            Self::Player => "player role required".to_string(),
            Self::ClientOrStaff(phone_number) => {
                format!("must be client {} or booking staff", phone_number)
            }
        }
    }
}

/// Checks every permission against an already resolved caller.
///
/// # Returns
/// - `Ok(())` - All permissions granted (always for an empty list)
/// - `Err(AuthError::AccessDenied)` - The first permission that failed
pub fn authorize(caller: &Caller, permissions: &[Permission]) -> Result<(), AuthError> {
    match permissions.iter().find(|p| !p.is_granted(caller)) {
        Some(permission) => Err(AuthError::AccessDenied(
            caller.subject(),
            permission.requirement(),
        )),
        None => Ok(()),
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the caller from the session and checks `permissions`.
    ///
    /// An empty list only requires an authenticated caller.
    ///
    /// # Returns
    /// - `Ok(Caller)` - Authenticated caller holding every permission
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase / ClientNotInDatabase)` - Session refers to a deleted account
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<Caller, AppError> {
        let caller = self.current().await?;

        authorize(&caller, permissions)?;

        Ok(caller)
    }

    async fn current(&self) -> Result<Caller, AppError> {
        let auth_session = AuthSession::new(self.session);

        if let Some(user_id) = auth_session.get_user_id().await? {
            let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
                return Err(AuthError::UserNotInDatabase(user_id).into());
            };

            return Ok(Caller::User(User::from_entity(user)?));
        }

        if let Some(phone_number) = auth_session.get_client_phone().await? {
            let Some(client) = ClientRepository::new(self.db)
                .find_by_phone(&phone_number)
                .await?
            else {
                return Err(AuthError::ClientNotInDatabase(phone_number).into());
            };

            return Ok(Caller::Client(client));
        }

        Err(AuthError::UserNotInSession.into())
    }
}

