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
        team::{AssignPlayerDto, CreateTeamDto, TeamDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::team::CreateTeamParams,
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a team led by a coach.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new team
/// - `400 Bad Request` - Empty name
/// - `404 Not Found` - No coach with that id
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let team = TeamService::new(&state.db)
        .create(CreateTeamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Teams by name", body = Vec<TeamDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_teams(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let teams = TeamService::new(&state.db).list().await?;
    let teams_dto: Vec<_> = teams.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(teams_dto)))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team", body = TeamDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = TeamService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Assign a player to a team.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Player assigned
/// - `404 Not Found` - Team or player not found
/// - `409 Conflict` - Player already on the team
#[utoipa::path(
    post,
    path = "/api/teams/{id}/players",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = AssignPlayerDto,
    responses(
        (status = 204, description = "Player assigned"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Team or player not found", body = ErrorDto),
        (status = 409, description = "Player already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_player(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AssignPlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TeamService::new(&state.db)
        .assign_player(id, payload.player_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}/players",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team players", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_team_players(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let players = TeamService::new(&state.db).list_players(id).await?;
    let players_dto: Vec<_> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(players_dto)))
}

/// Take a player off a team.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/teams/{id}/players/{player_id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID"),
        ("player_id" = i32, Path, description = "Player user ID")
    ),
    responses(
        (status = 204, description = "Player removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Player not on the team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_player(
    State(state): State<AppState>,
    session: Session,
    Path((id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TeamService::new(&state.db)
        .remove_player(id, player_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
