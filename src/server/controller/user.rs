use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{RegisterUserDto, UpdatePasswordDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{RegisterUserParams, Role},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a club user.
///
/// Admins register players, coaches and booking managers. The admin role cannot be
/// assigned here.
///
/// # Access Control
/// - `Admin` - Only admins can register users
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Missing field or invalid role
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `409 Conflict` - A user with this full name exists
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List all players.
#[utoipa::path(
    get,
    path = "/api/users/players",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Players by name", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_players(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    list_role(&state, &session, Role::Player).await
}

/// List all coaches.
#[utoipa::path(
    get,
    path = "/api/users/coaches",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Coaches by name", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_coaches(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    list_role(&state, &session, Role::Coach).await
}

async fn list_role(
    state: &AppState,
    session: &Session,
    role: Role,
) -> Result<(StatusCode, Json<Vec<UserDto>>), AppError> {
    let _ = AuthGuard::new(&state.db, session).require(&[]).await?;

    let users = UserService::new(&state.db).list_by_role(role).await?;
    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Set a new password for a user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/users/{id}/password",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdatePasswordDto,
    responses(
        (status = 204, description = "Password updated"),
        (status = 400, description = "Empty password", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_password(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .update_password(id, &payload.password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user.
///
/// Lessons and team memberships of the user are removed with it.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
