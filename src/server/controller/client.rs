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
        client::{ClientDto, RegisterClientDto, UpdateClientDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::client::{RegisterClientParams, UpdateClientParams},
        service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// Register a booking client.
///
/// Open to anyone. The phone number identifies the client from then on.
///
/// # Returns
/// - `201 Created` - The new client
/// - `400 Bad Request` - Missing field
/// - `409 Conflict` - Phone number already registered
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = RegisterClientDto,
    responses(
        (status = 201, description = "Client registered", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 409, description = "Phone number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_client(
    State(state): State<AppState>,
    Json(payload): Json<RegisterClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let client = ClientService::new(&state.db)
        .register(RegisterClientParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(client.into_dto())))
}

/// Update a client's names.
///
/// # Access Control
/// - `ClientOrStaff` - The client themself, an admin or a booking manager
#[utoipa::path(
    put,
    path = "/api/clients/{phone}",
    tag = CLIENT_TAG,
    params(
        ("phone" = String, Path, description = "Client phone number")
    ),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Client updated", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this client or booking staff", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    session: Session,
    Path(phone): Path<String>,
    Json(payload): Json<UpdateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClientOrStaff(phone.clone())])
        .await?;

    let client = ClientService::new(&state.db)
        .update(UpdateClientParams {
            phone_number: phone,
            first_name: payload.first_name.trim().to_string(),
            last_name: payload.last_name.trim().to_string(),
        })
        .await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Remove a client and all of their reservations.
///
/// # Access Control
/// - `ClientOrStaff` - The client themself, an admin or a booking manager
#[utoipa::path(
    delete,
    path = "/api/clients/{phone}",
    tag = CLIENT_TAG,
    params(
        ("phone" = String, Path, description = "Client phone number")
    ),
    responses(
        (status = 204, description = "Client removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this client or booking staff", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_client(
    State(state): State<AppState>,
    session: Session,
    Path(phone): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClientOrStaff(phone.clone())])
        .await?;

    ClientService::new(&state.db).delete(&phone).await?;

    Ok(StatusCode::NO_CONTENT)
}
