use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        client::{ClientDto, LoginClientDto},
        user::{CallerDto, LoginUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::{client::ClientService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in as a club user.
///
/// Verifies the user's full name and password and stores the user id in the session.
/// Any client login held by the same session is dropped.
///
/// # Returns
/// - `200 OK` - Logged in, body is the user
/// - `401 Unauthorized` - Unknown name or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginUserDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .login(&payload.first_name, &payload.last_name, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} logged in", user.id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log in as a booking client with phone number and password.
#[utoipa::path(
    post,
    path = "/api/auth/client/login",
    tag = AUTH_TAG,
    request_body = LoginClientDto,
    responses(
        (status = 200, description = "Logged in", body = ClientDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn client_login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let client = ClientService::new(&state.db)
        .login(&payload.phone_number, &payload.password)
        .await?;

    AuthSession::new(&session)
        .set_client_phone(client.phone_number.clone())
        .await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Clear the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get whoever is logged in on this session, a user or a client.
///
/// # Returns
/// - `200 OK` - The caller, tagged by `kind`
/// - `401 Unauthorized` - Nobody is logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current caller", body = CallerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(caller.into_dto())))
}
