use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Neither a user id nor a client phone number is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user or client in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Happens when a user is deleted while logged in. Results in a 401 Unauthorized
    /// response.
    #[error("User {0} in session not found in database")]
    UserNotInDatabase(i32),

    /// The session references a client phone number that no longer exists.
    #[error("Client {0} in session not found in database")]
    ClientNotInDatabase(String),

    /// The caller is authenticated but a permission check failed.
    ///
    /// # Fields
    /// - Subject of the caller (`user 3`, `client 5550001`)
    /// - Description of the failed check, logged but not returned
    #[error("Access denied for {0}: {1}")]
    AccessDenied(String, String),

    /// Login name, phone number or password did not match.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `ClientNotInDatabase` → 401 with "Not logged in"
/// - `InvalidCredentials` → 401 with "Invalid credentials"
/// - `AccessDenied` → 403 with "Insufficient permissions"
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::ClientNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
