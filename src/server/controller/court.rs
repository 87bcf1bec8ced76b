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
        court::{CourtDto, CourtInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::court::{CreateCourtParams, UpdateCourtParams},
        service::court::CourtService,
        state::AppState,
    },
};

/// Tag for grouping court endpoints in OpenAPI documentation
pub static COURT_TAG: &str = "court";

/// Add a court.
///
/// # Access Control
/// - `Admin` - Only admins can add courts
///
/// # Returns
/// - `201 Created` - The new court
/// - `400 Bad Request` - Empty name or type
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `409 Conflict` - Court name already in use
#[utoipa::path(
    post,
    path = "/api/courts",
    tag = COURT_TAG,
    request_body = CourtInputDto,
    responses(
        (status = 201, description = "Court added", body = CourtDto),
        (status = 400, description = "Invalid court data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Duplicate court name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_court(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CourtInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let court = CourtService::new(&state.db, &state.court_locks)
        .create(CreateCourtParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(court.into_dto())))
}

/// List all courts by name. Public.
#[utoipa::path(
    get,
    path = "/api/courts",
    tag = COURT_TAG,
    responses(
        (status = 200, description = "Courts by name", body = Vec<CourtDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_courts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courts = CourtService::new(&state.db, &state.court_locks)
        .list()
        .await?;

    let courts_dto: Vec<_> = courts.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(courts_dto)))
}

/// Get a court by ID. Public.
#[utoipa::path(
    get,
    path = "/api/courts/{id}",
    tag = COURT_TAG,
    params(
        ("id" = i32, Path, description = "Court ID")
    ),
    responses(
        (status = 200, description = "Court", body = CourtDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_court(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let court = CourtService::new(&state.db, &state.court_locks)
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(court.into_dto())))
}

/// Rename or retype a court.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/courts/{id}",
    tag = COURT_TAG,
    params(
        ("id" = i32, Path, description = "Court ID")
    ),
    request_body = CourtInputDto,
    responses(
        (status = 200, description = "Court updated", body = CourtDto),
        (status = 400, description = "Invalid court data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 409, description = "Duplicate court name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_court(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CourtInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let court = CourtService::new(&state.db, &state.court_locks)
        .update(UpdateCourtParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(court.into_dto())))
}

/// Delete a court.
///
/// Refused while any reservation still references the court.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Court deleted
/// - `404 Not Found` - Court not found
/// - `409 Conflict` - Court has reservations
#[utoipa::path(
    delete,
    path = "/api/courts/{id}",
    tag = COURT_TAG,
    params(
        ("id" = i32, Path, description = "Court ID")
    ),
    responses(
        (status = 204, description = "Court deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 409, description = "Court has reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_court(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CourtService::new(&state.db, &state.court_locks)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
