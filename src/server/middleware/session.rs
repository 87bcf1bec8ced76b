//! Type-safe session management wrappers.
//!
//! A session identifies at most one caller: either a club user by id or a booking
//! client by phone number. Logging in as one kind removes the other.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CLIENT_PHONE: &str = "auth:client";

/// Authentication session management.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a logged-in user's id and forgets any client login.
    ///
    /// The session id is rotated so a pre-login session id cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .remove::<String>(SESSION_AUTH_CLIENT_PHONE)
            .await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Stores a logged-in client's phone number and forgets any user login.
    pub async fn set_client_phone(&self, phone_number: String) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.remove::<i32>(SESSION_AUTH_USER_ID).await?;
        self.session
            .insert(SESSION_AUTH_CLIENT_PHONE, phone_number)
            .await?;
        Ok(())
    }

    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    pub async fn get_client_phone(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_CLIENT_PHONE).await?)
    }

    /// Whether a user or client is logged in.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some() || self.get_client_phone().await?.is_some())
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
