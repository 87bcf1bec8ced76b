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
        reservation::{ReservationDto, ReservationInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{authorize, AuthGuard, Permission},
        model::reservation::{Reservation, ReservationFilter, ReservationRequest},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Reserve a court for one hour.
///
/// # Access Control
/// - `ClientOrStaff` - The client named in the request, an admin or a booking manager
///
/// # Returns
/// - `201 Created` - The reservation with its id
/// - `400 Bad Request` - Malformed start time
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Booking for another client without staff role
/// - `404 Not Found` - Client or court not found
/// - `409 Conflict` - Overlaps another reservation on the court
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = ReservationInputDto,
    responses(
        (status = 201, description = "Court reserved", body = ReservationDto),
        (status = 400, description = "Malformed start time", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this client or booking staff", body = ErrorDto),
        (status = 404, description = "Client or court not found", body = ErrorDto),
        (status = 409, description = "Slot already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ReservationInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClientOrStaff(payload.client_phone.clone())])
        .await?;

    let reservation = ReservationService::new(&state.db, &state.court_locks)
        .create(ReservationRequest::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// List every reservation, latest first.
///
/// # Access Control
/// - `ManageBookings` - Admins and booking managers
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not booking staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBookings])
        .await?;

    list(&state, ReservationFilter::All).await
}

/// List one client's reservations, latest first.
///
/// # Access Control
/// - `ClientOrStaff`
#[utoipa::path(
    get,
    path = "/api/clients/{phone}/reservations",
    tag = RESERVATION_TAG,
    params(
        ("phone" = String, Path, description = "Client phone number")
    ),
    responses(
        (status = 200, description = "Client reservations", body = Vec<ReservationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this client or booking staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_client_reservations(
    State(state): State<AppState>,
    session: Session,
    Path(phone): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClientOrStaff(phone.clone())])
        .await?;

    list(&state, ReservationFilter::Client(phone)).await
}

/// List reservations on a court, earliest first.
///
/// Any logged-in caller may look at court occupancy.
#[utoipa::path(
    get,
    path = "/api/courts/{id}/reservations",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Court ID")
    ),
    responses(
        (status = 200, description = "Court reservations", body = Vec<ReservationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_court_reservations(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    list(&state, ReservationFilter::Court(id)).await
}

async fn list(
    state: &AppState,
    filter: ReservationFilter,
) -> Result<(StatusCode, Json<Vec<ReservationDto>>), AppError> {
    let reservations = ReservationService::new(&state.db, &state.court_locks)
        .list(filter)
        .await?;

    let reservations_dto: Vec<_> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations_dto)))
}

/// Get a reservation by ID.
///
/// # Access Control
/// - `ClientOrStaff` - The client holding the reservation or booking staff
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation", body = ReservationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the holder or booking staff", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = held_reservation(&state, &session, id).await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Move a reservation to another client, court or start.
///
/// The caller must be allowed to act for both the current holder and the client named
/// in the request.
#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ReservationInputDto,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDto),
        (status = 400, description = "Malformed start time", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the holder or booking staff", body = ErrorDto),
        (status = 404, description = "Reservation, client or court not found", body = ErrorDto),
        (status = 409, description = "Slot already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReservationInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let service = ReservationService::new(&state.db, &state.court_locks);

    let existing = service.get(id).await?;
    authorize(
        &caller,
        &[
            Permission::ClientOrStaff(existing.client_phone),
            Permission::ClientOrStaff(payload.client_phone.clone()),
        ],
    )?;

    let reservation = service
        .update(id, ReservationRequest::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Cancel a reservation.
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation cancelled"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the holder or booking staff", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    held_reservation(&state, &session, id).await?;

    ReservationService::new(&state.db, &state.court_locks)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Fetches a reservation the caller may act on: its holder or booking staff.
async fn held_reservation(
    state: &AppState,
    session: &Session,
    id: i32,
) -> Result<Reservation, AppError> {
    let caller = AuthGuard::new(&state.db, session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db, &state.court_locks)
        .get(id)
        .await?;
    authorize(
        &caller,
        &[Permission::ClientOrStaff(reservation.client_phone.clone())],
    )?;

    Ok(reservation)
}
