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
        availability::{AvailabilityDto, CreateAvailabilityDto, UpdateAvailabilityDto},
    },
    server::{
        error::AppError,
        middleware::auth::{authorize, AuthGuard, Permission},
        model::availability::AvailabilityRequest,
        service::availability::AvailabilityService,
        state::AppState,
    },
};

/// Tag for grouping coach availability endpoints in OpenAPI documentation
pub static AVAILABILITY_TAG: &str = "availability";

/// Publish a weekly availability window.
///
/// # Access Control
/// - `Coach` - Only the coach the window belongs to
///
/// # Returns
/// - `201 Created` - The new window
/// - `400 Bad Request` - Unknown day, malformed times, or start not before end
/// - `403 Forbidden` - Not that coach
#[utoipa::path(
    post,
    path = "/api/coach/availability",
    tag = AVAILABILITY_TAG,
    request_body = CreateAvailabilityDto,
    responses(
        (status = 201, description = "Window added", body = AvailabilityDto),
        (status = 400, description = "Invalid window", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this coach", body = ErrorDto),
        (status = 404, description = "Coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_availability(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Coach(payload.coach_id)])
        .await?;

    let (coach_id, request) = AvailabilityRequest::from_create_dto(payload);
    let window = AvailabilityService::new(&state.db)
        .add(coach_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(window.into_dto())))
}

/// List a coach's windows by day. Public.
#[utoipa::path(
    get,
    path = "/api/coach/{coach_id}/availability",
    tag = AVAILABILITY_TAG,
    params(
        ("coach_id" = i32, Path, description = "Coach user ID")
    ),
    responses(
        (status = 200, description = "Availability windows", body = Vec<AvailabilityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_availability(
    State(state): State<AppState>,
    Path(coach_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let windows = AvailabilityService::new(&state.db).list(coach_id).await?;
    let windows_dto: Vec<_> = windows.into_iter().map(|w| w.into_dto()).collect();

    Ok((StatusCode::OK, Json(windows_dto)))
}

#[utoipa::path(
    put,
    path = "/api/coach/availability/{id}",
    tag = AVAILABILITY_TAG,
    params(
        ("id" = i32, Path, description = "Availability ID")
    ),
    request_body = UpdateAvailabilityDto,
    responses(
        (status = 200, description = "Window updated", body = AvailabilityDto),
        (status = 400, description = "Invalid window", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this coach", body = ErrorDto),
        (status = 404, description = "Availability not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_availability(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let service = AvailabilityService::new(&state.db);

    let existing = service.get(id).await?;
    authorize(&caller, &[Permission::Coach(existing.coach_id)])?;

    let window = service
        .update(id, AvailabilityRequest::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(window.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/coach/availability/{id}",
    tag = AVAILABILITY_TAG,
    params(
        ("id" = i32, Path, description = "Availability ID")
    ),
    responses(
        (status = 204, description = "Window deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this coach", body = ErrorDto),
        (status = 404, description = "Availability not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_availability(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let service = AvailabilityService::new(&state.db);

    let existing = service.get(id).await?;
    authorize(&caller, &[Permission::Coach(existing.coach_id)])?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
