use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, availability, client, court, lesson, reservation, team, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Courtside API", description = "Tennis club court and lesson booking"),
    tags(
        (name = "auth", description = "Login and session"),
        (name = "user", description = "Club users"),
        (name = "client", description = "Booking clients"),
        (name = "court", description = "Courts"),
        (name = "reservation", description = "Court reservations"),
        (name = "lesson", description = "Coaching lessons"),
        (name = "team", description = "Teams"),
        (name = "availability", description = "Coach availability")
    )
)]
struct ApiDoc;

/// Builds the API routes and serves their OpenAPI document at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::login))
        .routes(routes!(auth::client_login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::current_user))
        // Users
        .routes(routes!(user::register_user))
        .routes(routes!(user::list_players))
        .routes(routes!(user::list_coaches))
        .routes(routes!(user::update_user_password))
        .routes(routes!(user::delete_user))
        // Clients
        .routes(routes!(client::register_client))
        .routes(routes!(client::update_client, client::remove_client))
        // Courts
        .routes(routes!(court::list_courts, court::add_court))
        .routes(routes!(court::get_court, court::update_court, court::delete_court))
        // Reservations
        .routes(routes!(
            reservation::list_reservations,
            reservation::create_reservation
        ))
        .routes(routes!(
            reservation::get_reservation,
            reservation::update_reservation,
            reservation::delete_reservation
        ))
        .routes(routes!(reservation::list_client_reservations))
        .routes(routes!(reservation::list_court_reservations))
        // Lessons
        .routes(routes!(lesson::book_lesson))
        .routes(routes!(lesson::list_player_lessons))
        .routes(routes!(lesson::list_coach_lessons))
        // Teams
        .routes(routes!(team::list_teams, team::create_team))
        .routes(routes!(team::get_team))
        .routes(routes!(team::list_team_players, team::assign_player))
        .routes(routes!(team::remove_player))
        // Coach availability
        .routes(routes!(availability::add_availability))
        .routes(routes!(availability::list_availability))
        .routes(routes!(
            availability::update_availability,
            availability::delete_availability
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
